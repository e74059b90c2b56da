use crate::{
    api::EmployeeStats,
    components::cards::{CardTone, StatCard},
};
use leptos::*;

#[component]
pub fn EmployeeStatsView(stats: EmployeeStats) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <dl class="space-y-3">
                <div>
                    <dt class="text-sm text-fg-muted">"Employee Name"</dt>
                    <dd class="text-lg font-semibold">{stats.full_name}</dd>
                </div>
                <div>
                    <dt class="text-sm text-fg-muted">"Employee ID"</dt>
                    <dd class="text-lg font-semibold">{stats.employee_id}</dd>
                </div>
                <div>
                    <dt class="text-sm text-fg-muted">"Department"</dt>
                    <dd class="text-lg font-semibold">{stats.department}</dd>
                </div>
            </dl>
            <div class="grid grid-cols-3 gap-4">
                <StatCard label="Present Days" value=stats.total_present.to_string() tone=CardTone::Positive />
                <StatCard label="Absent Days" value=stats.total_absent.to_string() tone=CardTone::Negative />
                <StatCard label="Total Days" value=stats.total_days.to_string() />
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stats_view_lists_counts() {
        let html = render_to_string(move || {
            let stats = EmployeeStats {
                employee_id: "EMP001".into(),
                full_name: "Asha Rao".into(),
                department: "Engineering".into(),
                total_present: 18,
                total_absent: 2,
                total_days: 20,
            };
            view! { <EmployeeStatsView stats=stats /> }
        });
        assert!(html.contains("Asha Rao"));
        assert!(html.contains("Present Days"));
        assert!(html.contains("18"));
        assert!(html.contains("20"));
    }
}
