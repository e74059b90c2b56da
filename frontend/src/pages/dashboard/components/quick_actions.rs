use leptos::*;

const ACTIONS: [(&str, &str, &str); 2] = [
    ("/employees", "Manage Employees", "Add, view, or remove employees"),
    ("/attendance", "Track Attendance", "Mark and view attendance records"),
];

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"Quick Actions"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {ACTIONS
                    .iter()
                    .map(|(href, title, description)| view! {
                        <a href=*href class="block p-4 border border-border rounded-lg hover:bg-surface-muted transition-colors">
                            <p class="font-semibold text-fg">{*title}</p>
                            <p class="text-sm text-fg-muted">{*description}</p>
                        </a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
