use super::{
    components::{EmployeeForm, EmployeeSearch, EmployeeTable},
    view_model::use_employees_view_model,
};
use crate::{
    components::{
        common::Button,
        confirm_dialog::ConfirmDialog,
        layout::{ErrorMessage, Layout, LoadingSpinner},
        modal::Modal,
    },
    state::ViewStatus,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <Title text="Employees | HRMS Lite"/>
        <Layout>
            <EmployeesPanel/>
        </Layout>
    }
}

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();

    let status = Signal::derive(move || vm.status());
    let visible = Signal::derive(move || vm.visible());
    let total = Signal::derive(move || vm.employees().len());
    let search = Signal::derive(move || vm.search.get());
    let form_open = Signal::derive(move || vm.form.with(|form| form.open));
    let draft = Signal::derive(move || vm.form.with(|form| form.draft.clone()));
    let form_error = Signal::derive(move || vm.form.with(|form| form.error.clone()));
    let submitting = Signal::from(vm.create_action.pending());
    let confirm_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let deleting = Signal::from(vm.delete_action.pending());

    let on_retry = Callback::new(vm.on_retry());
    let on_search = Callback::new(vm.on_search());
    let on_delete = Callback::new(vm.on_request_delete());
    let on_open = Callback::new(vm.on_open_form());
    let on_close = Callback::new(vm.on_close_form());
    let on_input = Callback::new(vm.on_field_input());
    let on_submit = Callback::new(vm.on_submit());
    let on_confirm_delete = Callback::new(vm.on_confirm_delete());
    let on_cancel_delete = Callback::new(vm.on_cancel_delete());

    view! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                <div>
                    <h1 class="text-2xl md:text-3xl font-bold text-fg">"Employees"</h1>
                    <p class="mt-1 text-fg-muted">"Manage your organization's employees"</p>
                </div>
                <Button on:click=move |_| on_open.call(())>"+ Add Employee"</Button>
            </div>
            {move || match status.get() {
                ViewStatus::Loading => view! { <LoadingSpinner message="Loading employees..." /> }.into_view(),
                ViewStatus::Error(message) => view! { <ErrorMessage message=message on_retry=on_retry /> }.into_view(),
                ViewStatus::Empty | ViewStatus::Populated => view! {
                    <div class="space-y-6">
                        <EmployeeSearch value=search on_input=on_search />
                        <EmployeeTable employees=visible total=total on_delete=on_delete />
                    </div>
                }
                .into_view(),
            }}
            <Modal is_open=form_open title="Add New Employee" on_close=on_close>
                <EmployeeForm
                    draft=draft
                    error=form_error
                    submitting=submitting
                    on_input=on_input
                    on_submit=on_submit
                    on_cancel=on_close
                />
            </Modal>
            <ConfirmDialog
                is_open=confirm_open
                title="Delete employee"
                message="Are you sure you want to delete this employee?"
                confirm_label="Delete"
                confirm_disabled=deleting
                destructive=true
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
            />
        </div>
    }
}
