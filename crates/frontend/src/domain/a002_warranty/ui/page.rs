use crate::domain::a002_warranty::api;
use crate::domain::a002_warranty::view_model::{
    effective_status, line_total, period_label, remaining_label, submit_action, LookupSubmit,
};
use crate::shared::api_utils::show_result;
use crate::shared::components::{EmptyState, ErrorAlert};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_number_int;
use crate::shared::url_state::{use_url_filters, FilterSchema, FilterValue};
use contracts::domain::a002_warranty::{Invoice, InvoiceItem, WarrantyStatus};
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Spinner};

const TERM: &str = "q";

/// Public warranty lookup by phone number or serial. The last searched term
/// lives in the URL so a result page can be shared or reloaded.
#[component]
pub fn WarrantyLookup() -> impl IntoView {
    let filters = use_url_filters(FilterSchema::new().string(TERM));
    let term = Memo::new(move |_| filters.state().with(|s| s.get_string(TERM)));

    let (input, set_input) = signal(term.get_untracked().unwrap_or_default());
    let (invoices, set_invoices) = signal(None::<Vec<Invoice>>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Bumped to repeat the lookup for an unchanged term
    let (attempt, set_attempt) = signal(0u32);
    let retry = move || set_attempt.update(|n| *n += 1);

    Effect::new(move |_| {
        let issued = attempt.get();
        let Some(current) = term.get() else {
            set_invoices.set(None);
            return;
        };
        set_loading.set(true);
        set_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::lookup_invoices(&current).await;
            if term.get_untracked().as_deref() != Some(current.as_str())
                || attempt.get_untracked() != issued
            {
                return;
            }
            if let Err(e) = &result {
                log::error!("Warranty lookup failed: {}", e);
            }
            show_result(result, set_invoices, set_error);
            set_loading.set(false);
        });
    });

    let submit = move || {
        let raw = input.get_untracked();
        match term.with_untracked(|t| submit_action(t.as_deref(), &raw)) {
            Ok(LookupSubmit::Search(value)) => filters.set(TERM, Some(FilterValue::Str(value))),
            Ok(LookupSubmit::Repeat) => retry(),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="content warranty-lookup">
            <div class="header">
                <h2>{icon("shield")} " Warranty lookup"</h2>
            </div>

            <form
                class="warranty-lookup__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <input
                    type="search"
                    class="warranty-lookup__input"
                    placeholder="Phone number or serial number"
                    prop:value=input
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {icon("search")}
                    " Search"
                </button>
            </form>

            {move || error.get().map(|err| view! {
                <ErrorAlert message=err on_retry=Callback::new(move |_| retry()) />
            })}
            {move || loading.get().then(|| view! { <Spinner /> })}

            {move || invoices.get().map(|found| {
                if found.is_empty() {
                    view! { <EmptyState message="No invoices found" /> }.into_any()
                } else {
                    found
                        .into_iter()
                        .map(|invoice| view! { <InvoiceCard invoice=invoice /> })
                        .collect_view()
                        .into_any()
                }
            })}
        </div>
    }
}

#[component]
fn InvoiceCard(invoice: Invoice) -> impl IntoView {
    let customer = [invoice.customer_name.clone(), invoice.customer_phone.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <div class="invoice-card">
            <div class="invoice-card__header">
                <strong>{invoice.code.clone()}</strong>
                <span>{format_date(&invoice.purchase_date)}</span>
                {invoice.branch_name.clone().map(|b| view! { <span class="invoice-card__branch">{b}</span> })}
            </div>
            {(!customer.is_empty()).then(|| view! { <div class="invoice-card__customer">{customer}</div> })}
            <table class="invoice-card__items">
                <tbody>
                    {invoice
                        .items
                        .into_iter()
                        .map(|item| view! { <InvoiceItemRow item=item /> })
                        .collect_view()}
                </tbody>
            </table>
            <div class="invoice-card__total">
                {format!("Total: {}", format_number_int(invoice.total_amount))}
            </div>
        </div>
    }
}

#[component]
fn InvoiceItemRow(item: InvoiceItem) -> impl IntoView {
    let total = line_total(&item);
    let serials = item.serial_numbers.join(", ");
    let warranty = item.warranty.clone().map(|info| {
        let status = effective_status(&info);
        let color = match status {
            WarrantyStatus::Active => BadgeColor::Success,
            WarrantyStatus::Expired => BadgeColor::Danger,
            WarrantyStatus::Unknown => BadgeColor::Informative,
        };
        view! {
            <Badge appearance=BadgeAppearance::Tint color=color>{status.label()}</Badge>
            <span class="warranty__remaining">{remaining_label(&info)}</span>
            {period_label(&info).map(|p| view! { <span class="warranty__period">{p}</span> })}
            <span class="warranty__type">{info.warranty_type.clone()}</span>
        }
        .into_any()
    });

    view! {
        <tr>
            <td>
                <div>{item.product_name.clone()}</div>
                <small>{item.product_code.clone()}</small>
                {(!serials.is_empty()).then(|| view! { <small class="serials">{format!("SN: {}", serials)}</small> })}
            </td>
            <td>{format_number_int(item.quantity)}</td>
            <td>{total}</td>
            <td class="warranty">
                {warranty.unwrap_or_else(|| view! { <span class="warranty__none">"No warranty"</span> }.into_any())}
            </td>
        </tr>
    }
}
