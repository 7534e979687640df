use thousands::Separable;

use crate::budget::{Assessment, ContextBudget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Polish,
    English,
}

pub fn format_thousands(n: u64) -> String {
    n.separate_with_commas()
}

/// Renders the message shown to the agent once the threshold is crossed.
///
/// The agent is told to ask the user, via `AskUserQuestion`, which of three
/// ways forward to take.
pub fn format_warning(
    assessment: &Assessment,
    budget: &ContextBudget,
    language: Language,
) -> String {
    let percent = assessment.percent;
    let tokens = format_thousands(assessment.tokens);
    let limit = format_thousands(budget.limit);
    let threshold = budget.threshold_percent;

    match language {
        Language::Polish => format!(
            "🚨 KONTEKST: {percent}% ({tokens}/{limit} tokenów)

Przekroczono próg {threshold}%. MUSISZ użyć narzędzia AskUserQuestion z pytaniem:
\"Kontekst przekroczył {percent}%. Co chcesz zrobić?\"

Opcje do pokazania użytkownikowi:
1. \"Dokończ zadanie i commituj\" - Dokończę bieżące zadanie, wykonam commit i zakończę sesję
2. \"Zapisz kontekst (/dev-docs-update)\" - Uruchomię /dev-docs-update aby zapisać stan pracy
3. \"Kontynuuj z subagentami\" - Od teraz WSZYSTKIE złożone operacje (wyszukiwanie, analiza kodu, implementacja) będę delegować do subagentów przez Task tool, aby nie zużywać kontekstu głównej sesji"
        ),
        Language::English => format!(
            "🚨 CONTEXT: {percent}% ({tokens}/{limit} tokens)

The {threshold}% threshold has been exceeded. You MUST use the AskUserQuestion tool with the question:
\"Context has exceeded {percent}%. What would you like to do?\"

Options to show the user:
1. \"Finish the task and commit\" - I will finish the current task, commit, and end the session
2. \"Save context (/dev-docs-update)\" - I will run /dev-docs-update to save the state of the work
3. \"Continue with subagents\" - From now on I will delegate ALL complex operations (searching, code analysis, implementation) to subagents via the Task tool so the main session's context is not consumed"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(160_000), "160,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn polish_warning_matches_reference_layout() {
        let budget = ContextBudget::default();
        let text = format_warning(&budget.assess(160_000), &budget, Language::Polish);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "🚨 KONTEKST: 80% (160,000/200,000 tokenów)");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("Przekroczono próg 75%."));
        assert_eq!(lines[3], "\"Kontekst przekroczył 80%. Co chcesz zrobić?\"");
        assert!(lines[6].starts_with("1. \"Dokończ zadanie i commituj\""));
        assert!(lines[7].contains("/dev-docs-update"));
        assert!(lines[8].starts_with("3. \"Kontynuuj z subagentami\""));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn english_warning_keeps_structure() {
        let budget = ContextBudget::new(100_000, 50).unwrap();
        let text = format_warning(&budget.assess(62_500), &budget, Language::English);

        assert!(text.starts_with("🚨 CONTEXT: 62% (62,500/100,000 tokens)"));
        assert!(text.contains("The 50% threshold"));
        let options: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with(|c: char| c.is_ascii_digit()))
            .collect();
        assert_eq!(options.len(), 3);
        assert!(options[2].contains("Task tool"));
    }
}
