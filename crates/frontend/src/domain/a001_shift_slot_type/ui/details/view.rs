use super::form::ShiftSlotTypeForm;
use super::view_model::ShiftSlotTypeDetailsViewModel;
use crate::shared::components::ErrorAlert;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ShiftSlotTypeDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ShiftSlotTypeDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container shift-slot-type-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Edit shift slot type" } else { "New shift slot type" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <ErrorAlert message=e /> })}

            <div class="details-form">
                {text_field(vm, "name", "Name", "text", |f| &f.name, |f, v| f.name = v)}
                {text_field(vm, "code", "Code", "text", |f| &f.code, |f, v| f.code = v)}
                <div class="form-row">
                    {text_field(vm, "start_time", "Start", "time", |f| &f.start_time, |f, v| f.start_time = v)}
                    {text_field(vm, "end_time", "End", "time", |f| &f.end_time, |f, v| f.end_time = v)}
                    {text_field(vm, "color", "Color", "color", |f| &f.color, |f, v| f.color = v)}
                </div>
                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.description = value);
                        }
                    />
                </div>
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.with(|f| f.is_active)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.form.update(|f| f.is_active = checked);
                        }
                    />
                    " Active"
                </label>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || !vm.is_form_valid() || vm.saving.get()
                >
                    {icon("edit")}
                    {move || if vm.is_edit_mode() { " Save" } else { " Create" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    " Cancel"
                </button>
            </div>
        </div>
    }
}

fn text_field(
    vm: ShiftSlotTypeDetailsViewModel,
    field_id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&ShiftSlotTypeForm) -> &String,
    set: fn(&mut ShiftSlotTypeForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field_id>{label}</label>
            <input
                type=input_type
                id=field_id
                prop:value=move || vm.form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            />
        </div>
    }
}
