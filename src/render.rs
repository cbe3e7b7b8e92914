// Panel bodies for each result type: a small header plus the formatted text.

use crate::format::{self, escape_html};
use crate::model::{PlanResult, SuggestResult, TipsResult};

fn text(s: &str, escape: bool) -> String {
    if escape {
        escape_html(s)
    } else {
        s.to_string()
    }
}

fn day_word(n: u32) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}

fn extras(plan: &PlanResult, escape: bool) -> String {
    let mut out = String::new();

    let recs: Vec<&String> = plan
        .recommendations
        .iter()
        .flatten()
        .filter(|r| !r.trim().is_empty())
        .collect();
    if !recs.is_empty() {
        out.push_str(&format!(
            "<h5 style=\"{}\">Recommendations</h5>",
            format::PLAN.h5_style
        ));
        for r in recs {
            out.push_str(&format!(
                "<li style=\"{}\">{}</li>",
                format::PLAN.li_style,
                text(r.trim(), escape)
            ));
        }
    }

    if let Some(budget) = plan.budget_estimate.as_deref().map(str::trim) {
        if !budget.is_empty() {
            out.push_str(&format!(
                "<h5 style=\"{}\">Budget Estimate</h5><p>{}</p>",
                format::PLAN.h5_style,
                text(budget, escape)
            ));
        }
    }

    out
}

pub fn plan_html(plan: &PlanResult, escape: bool) -> String {
    format!(
        "<div class=\"plan-header\"><h4>📍 {}</h4><p><strong>Duration:</strong> {} {}</p></div>\
         <div class=\"plan-body\">{}{}</div>",
        text(&plan.destination, escape),
        plan.number_of_days,
        day_word(plan.number_of_days),
        format::format_content(&plan.overview, &format::PLAN, escape),
        extras(plan, escape)
    )
}

pub fn tips_html(tips: &TipsResult, escape: bool) -> String {
    format!(
        "<div class=\"tips-header\"><h4>📍 {}</h4></div><div class=\"tips-body\">{}</div>",
        text(&tips.destination, escape),
        format::format_content(&tips.tips, &format::TIPS, escape)
    )
}

pub fn suggest_html(s: &SuggestResult, escape: bool) -> String {
    format!(
        "<div class=\"suggest-body\">{}</div>",
        format::format_content(&s.suggestions, &format::SUGGEST, escape)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(days: u32, overview: &str) -> PlanResult {
        PlanResult {
            destination: "Paris".into(),
            number_of_days: days,
            overview: overview.into(),
            recommendations: None,
            budget_estimate: None,
        }
    }

    #[test]
    fn plan_header_and_body() {
        let html = plan_html(&plan(3, "Day 1\n- Visit Louvre"), true);
        assert!(html.contains("<h4>📍 Paris</h4>"));
        assert!(html.contains("<strong>Duration:</strong> 3 days"));
        let h = html.find(">Day 1</h4>").unwrap();
        let li = html.find(">Visit Louvre</li>").unwrap();
        assert!(h < li);
    }

    #[test]
    fn single_day_is_singular() {
        assert!(plan_html(&plan(1, "x"), true).contains("1 day</p>"));
    }

    #[test]
    fn plan_extras_only_when_present() {
        let mut p = plan(2, "Overview");
        assert!(!plan_html(&p, true).contains("Recommendations"));

        p.recommendations = Some(vec!["Pack an umbrella".into(), "  ".into()]);
        p.budget_estimate = Some("About €900".into());
        let html = plan_html(&p, true);
        assert!(html.contains("Recommendations</h5>"));
        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains("<p>About €900</p>"));
    }

    #[test]
    fn tips_header_escapes_destination() {
        let t = TipsResult {
            destination: "<Rome>".into(),
            tips: "1. Validate tickets".into(),
        };
        let html = tips_html(&t, true);
        assert!(html.contains("📍 &lt;Rome&gt;"));
        assert!(html.contains("1. Validate tickets</strong>"));
    }

    #[test]
    fn suggest_has_body_only() {
        let html = suggest_html(&SuggestResult { suggestions: "Lisbon".into() }, true);
        assert_eq!(
            html,
            "<div class=\"suggest-body\"><p style=\"margin-bottom: 0.75rem;\">Lisbon</p></div>"
        );
    }
}
