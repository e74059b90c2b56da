use crate::{
    api::DashboardStats,
    components::cards::{CardTone, StatCard},
};
use leptos::*;

#[component]
pub fn SummaryCards(stats: DashboardStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
            <StatCard label="Total Employees" value=stats.total_employees.to_string() />
            <StatCard label="Total Attendance Records" value=stats.total_attendance_records.to_string() />
            <StatCard label="Present Today" value=stats.present_today.to_string() tone=CardTone::Positive />
            <StatCard label="Absent Today" value=stats.absent_today.to_string() tone=CardTone::Negative />
        </div>
    }
}
