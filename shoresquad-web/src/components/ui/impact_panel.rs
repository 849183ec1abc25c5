use shoresquad_core::MonthlyImpact;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub total_kg: f64,
    pub crew_count: usize,
    pub cleanup_count: usize,
    pub months: Vec<MonthlyImpact>,
}

#[function_component(ImpactPanel)]
pub fn impact_panel(p: &Props) -> Html {
    let monthly = if p.months.is_empty() {
        html! {
            <p class="empty-note">{ "No impact tracked yet. Log your first cleanup to see monthly statistics! 📊" }</p>
        }
    } else {
        html! {
            <div class="monthly-impact-grid" role="list">
                { for p.months.iter().map(month_card) }
            </div>
        }
    };

    html! {
        <section id="impact" class="panel impact-panel" aria-label="Impact tracker">
            <div class="panel-head">
                <h2>{ "Impact Tracker" }</h2>
            </div>
            <div class="stat-chip-grid" role="list">
                { stat_chip("Crew", &p.crew_count.to_string()) }
                { stat_chip("Cleanups", &p.cleanup_count.to_string()) }
                { stat_chip("Kg removed", &format!("{:.0}", p.total_kg)) }
            </div>
            { monthly }
        </section>
    }
}

fn stat_chip(label: &str, value: &str) -> Html {
    html! {
        <div class="stat-chip" role="listitem">
            <span class="stat-label">{ label }</span>
            <span class="stat-value">{ value }</span>
        </div>
    }
}

fn month_card(month: &MonthlyImpact) -> Html {
    let cleanups_text = if month.cleanups == 1 {
        "1 cleanup".to_string()
    } else {
        format!("{} cleanups", month.cleanups)
    };
    html! {
        <div class="monthly-impact-card" role="listitem">
            <div class="month-year-header">{ month.label() }</div>
            <div class="month-kg">{ format!("{:.1}", month.kg) }<span class="month-kg-unit">{ "kg" }</span></div>
            <div class="month-cleanups">{ "📅 " }{ cleanups_text }</div>
        </div>
    }
}
