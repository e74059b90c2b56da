use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl CardTone {
    fn value_class(&self) -> &'static str {
        match self {
            CardTone::Neutral => "text-fg",
            CardTone::Positive => "text-status-success-text",
            CardTone::Negative => "text-status-error-text",
        }
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional)] tone: CardTone,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg p-6">
            <p class="text-xs font-semibold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class=format!("mt-3 text-3xl font-bold {}", tone.value_class())>{value}</p>
        </div>
    }
}
