use super::form::ShiftSlotTypeForm;
use crate::domain::a001_shift_slot_type::api;
use leptos::prelude::*;

/// ViewModel for the slot type form
#[derive(Clone, Copy)]
pub struct ShiftSlotTypeDetailsViewModel {
    pub form: RwSignal<ShiftSlotTypeForm>,
    /// Values as loaded, to send only changed fields on update
    pub original: RwSignal<ShiftSlotTypeForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ShiftSlotTypeDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ShiftSlotTypeForm::default()),
            original: RwSignal::new(ShiftSlotTypeForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Load the slot type when editing an existing one
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&existing_id).await {
                Ok(slot) => {
                    let form = ShiftSlotTypeForm::from(slot);
                    vm.original.set(form.clone());
                    vm.form.set(form);
                }
                Err(e) => vm.error.set(Some(format!("Failed to load: {}", e))),
            }
        });
    }

    /// Create or update. On failure the form stays open with the error shown.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg.to_string()));
            return;
        }

        let vm = *self;
        let original = self.original.get_untracked();
        vm.saving.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &current.id {
                Some(id) => api::update(id, &current.to_update_dto(&original)).await,
                None => api::create(&current.to_create_dto()).await,
            };
            vm.saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("shift slot type saved: {}", saved.id);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save shift slot type: {}", e);
                    vm.error.set(Some(e.to_string()));
                }
            }
        });
    }
}
