//! Independent dashboard widgets. Each one receives its slice of the
//! snapshot and derives its own presentation values.

use crate::dashboards::d100_workforce_overview::view_model::{
    activity_rows, department_bars, performer_rows, shift_trend_bars, stat_cards,
};
use crate::shared::bar_metrics::width_style;
use crate::shared::components::{BarRow, EmptyState, StatCard};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::dashboards::d100_workforce_overview::{
    DashboardStats, DepartmentPerformance, RecentActivity, ShiftTrend, TopPerformer,
};
use leptos::prelude::*;

#[component]
pub fn StatsSummary(stats: DashboardStats) -> impl IntoView {
    view! {
        <div class="stats-summary">
            {stat_cards(&stats)
                .into_iter()
                .map(|card| {
                    view! {
                        <StatCard
                            label=card.label.to_string()
                            icon_name=card.icon.to_string()
                            value=card.value
                            tone=card.tone
                            subtitle=card.subtitle
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ShiftTrendsCard(trends: Vec<ShiftTrend>) -> impl IntoView {
    let bars = shift_trend_bars(&trends);

    view! {
        <section class="dashboard-card">
            <h3 class="dashboard-card__title">"Shift trends"</h3>
            {if bars.is_empty() {
                view! { <EmptyState message="No shifts in this period" /> }.into_any()
            } else {
                bars.into_iter()
                    .map(|bar| {
                        view! {
                            <div class="trend-row">
                                <span class="trend-row__label">{bar.label}</span>
                                <div class="trend-row__bars">
                                    <div class="trend-row__track">
                                        <div class="trend-row__fill trend-row__fill--shifts" style=width_style(bar.shifts_width)></div>
                                        <span class="trend-row__value">{bar.shifts}</span>
                                    </div>
                                    <div class="trend-row__track">
                                        <div class="trend-row__fill trend-row__fill--hours" style=width_style(bar.hours_width)></div>
                                        <span class="trend-row__value">{bar.hours}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}

#[component]
pub fn DepartmentPerformanceCard(departments: Vec<DepartmentPerformance>) -> impl IntoView {
    let bars = department_bars(&departments);

    view! {
        <section class="dashboard-card">
            <h3 class="dashboard-card__title">"Department performance"</h3>
            {if bars.is_empty() {
                view! { <EmptyState message="No department data" /> }.into_any()
            } else {
                bars.into_iter()
                    .map(|bar| {
                        let variant = if bar.low_attendance { "warning" } else { "default" };
                        view! {
                            <div class="department-row">
                                <BarRow
                                    label=bar.name
                                    value=format!("{} shifts", bar.shifts)
                                    width=bar.shifts_width
                                    variant=variant
                                />
                                <span class="department-row__meta">
                                    {format!("{} employees · attendance {}", bar.employees, bar.attendance)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}

#[component]
pub fn TopPerformersCard(performers: Vec<TopPerformer>) -> impl IntoView {
    let rows = performer_rows(&performers);

    view! {
        <section class="dashboard-card">
            <h3 class="dashboard-card__title">"Top performers"</h3>
            {if rows.is_empty() {
                view! { <EmptyState message="No performer data" /> }.into_any()
            } else {
                view! {
                    <table class="performers-table">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Employee"</th>
                                <th>"Department"</th>
                                <th>"Shifts"</th>
                                <th>"Hours"</th>
                                <th>"Attendance"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.rank}</td>
                                            <td>{row.name}</td>
                                            <td>{row.department}</td>
                                            <td>{row.shifts}</td>
                                            <td>
                                                <div class="performers-table__hours">
                                                    <div class="performers-table__bar" style=width_style(row.hours_width)></div>
                                                    <span>{row.hours}</span>
                                                </div>
                                            </td>
                                            <td>{row.attendance}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
pub fn RecentActivitiesCard(activities: Vec<RecentActivity>) -> impl IntoView {
    let rows = activity_rows(&activities, Utc::now());

    view! {
        <section class="dashboard-card">
            <h3 class="dashboard-card__title">"Recent activity"</h3>
            {if rows.is_empty() {
                view! { <EmptyState message="No recent activity" /> }.into_any()
            } else {
                view! {
                    <ul class="activity-list">
                        {rows.into_iter()
                            .map(|row| {
                                view! {
                                    <li class="activity-list__item" data-id=row.id>
                                        <span class="activity-list__icon">{icon(row.icon)}</span>
                                        <div class="activity-list__body">
                                            <span class="activity-list__description">{row.description}</span>
                                            {row.user.map(|u| view! { <span class="activity-list__user">{u}</span> })}
                                        </div>
                                        <span class="activity-list__time">{row.when}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}
