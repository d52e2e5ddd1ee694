//! Theme selector expansion.
//!
//! A *run* starts at a marker occurrence and extends up to, but not including,
//! the next block-opening `{`. Each run is split on its separator commas;
//! marker-bearing selectors are emitted once per target theme, everything else
//! once, and the result is joined with `,\n`.

use anyhow::{Result, bail};
use tracing::debug;

use crate::core::css_scan::{Structure, scan_structure};
use crate::core::types::ThemeSet;

const JOINER: &str = ",\n";

/// Rewritten stylesheet plus counts for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub text: String,
    /// Number of runs that were rewritten.
    pub groups: usize,
    /// Selectors emitted across all rewritten runs.
    pub selectors: usize,
}

/// Expand every marker-bearing selector run in `text`.
///
/// Text outside runs is copied through untouched. A marker inside a comment,
/// string or url is ignored, and one never followed by `{` is left alone.
pub fn expand_selectors(text: &str, themes: &ThemeSet) -> Result<Expansion> {
    if themes.marker.is_empty() {
        bail!("theme marker must not be empty");
    }
    if themes.targets.is_empty() {
        bail!("theme targets must not be empty");
    }

    let structure = scan_structure(text);
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut groups = 0;
    let mut selectors = 0;

    for (start, _) in text.match_indices(themes.marker.as_str()) {
        if start < last || structure.is_inert(start) {
            continue;
        }
        let Some(end) = structure.next_brace_after(start) else {
            break;
        };
        let run = &text[start..end];

        let emitted = expand_run(text, start..end, &structure, themes);
        debug!(offset = start, selectors = emitted.len(), "expanded selector run");

        out.push_str(&text[last..start]);
        out.push_str(&emitted.join(JOINER));
        out.push_str(&run[run.trim_end().len()..]);
        groups += 1;
        selectors += emitted.len();
        last = end;
    }
    out.push_str(&text[last..]);

    Ok(Expansion {
        text: out,
        groups,
        selectors,
    })
}

fn expand_run(
    text: &str,
    run: std::ops::Range<usize>,
    structure: &Structure,
    themes: &ThemeSet,
) -> Vec<String> {
    let mut emitted = Vec::new();
    let mut piece_start = run.start;
    let bounds = structure
        .commas_within(run.clone())
        .iter()
        .map(|&comma| (comma, comma + 1))
        .chain(std::iter::once((run.end, run.end)));

    for (piece_end, next_start) in bounds {
        let selector = text[piece_start..piece_end].trim();
        if selector.contains(&themes.marker) {
            emitted.extend(
                themes
                    .targets
                    .iter()
                    .map(|target| selector.replace(&themes.marker, target)),
            );
        } else {
            emitted.push(selector.to_string());
        }
        piece_start = next_start;
    }
    emitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::expanded;

    fn expand(text: &str) -> Expansion {
        expand_selectors(text, &ThemeSet::default()).expect("expand")
    }

    #[test]
    fn single_selector_fans_out_to_every_theme() {
        let result = expand("body.halloween-theme #masthead-container {");
        assert_eq!(
            result.text,
            format!("{} {{", expanded("#masthead-container"))
        );
        assert_eq!(result.groups, 1);
        assert_eq!(result.selectors, 6);
        assert_eq!(result.text.matches("#masthead-container").count(), 6);
    }

    #[test]
    fn non_marker_selector_keeps_its_position() {
        let result = expand("body.halloween-theme .a, .b {");
        assert_eq!(result.text, format!("{},\n.b {{", expanded(".a")));
        assert_eq!(result.text.matches(".b").count(), 1);
        assert_eq!(result.selectors, 7);
    }

    #[test]
    fn selectors_before_the_marker_are_untouched() {
        let result = expand(".x, body.halloween-theme .a {");
        assert_eq!(result.text, format!(".x, {} {{", expanded(".a")));
    }

    #[test]
    fn declarations_and_unrelated_rules_pass_through() {
        let css = "\
.plain { color: red; }
body.halloween-theme .card {
  background: #000;
}
";
        let result = expand(css);
        assert_eq!(
            result.text,
            format!(
                ".plain {{ color: red; }}\n{} {{\n  background: #000;\n}}\n",
                expanded(".card")
            )
        );
    }

    #[test]
    fn every_rule_is_expanded() {
        let css = "body.halloween-theme .a { }\nbody.halloween-theme .b { }";
        let result = expand(css);
        assert_eq!(result.groups, 2);
        assert_eq!(result.selectors, 12);
    }

    #[test]
    fn stylesheet_without_marker_is_unchanged() {
        let css = "body.theme-matrix .a { color: green; }";
        let result = expand(css);
        assert_eq!(result.text, css);
        assert_eq!(result.groups, 0);
    }

    #[test]
    fn marker_without_brace_is_unchanged() {
        let css = ".a { }\nbody.halloween-theme .dangling";
        assert_eq!(expand(css).text, css);
    }

    #[test]
    fn comments_do_not_end_or_start_a_run() {
        let css = "/* body.halloween-theme { */\nbody.halloween-theme .a /* x { y */ {";
        let result = expand(css);
        assert_eq!(result.groups, 1);
        assert!(result.text.starts_with("/* body.halloween-theme { */\n"));
        assert!(result.text.contains("body.theme-toxic .a /* x { y */ {"));
    }

    #[test]
    fn commas_inside_functional_pseudo_classes_do_not_split() {
        let result = expand("body.halloween-theme :is(.a, .b) {");
        assert_eq!(result.text, format!("{} {{", expanded(":is(.a, .b)")));
    }

    #[test]
    fn escaped_quote_does_not_hide_the_brace() {
        let css = "body.halloween-theme .q\\\"x {\n  color: red;\n}\n.other {\n}\n";
        let result = expand(css);
        assert_eq!(result.groups, 1);
        assert_eq!(result.selectors, 6);
        assert_eq!(
            result.text,
            format!(
                "{} {{\n  color: red;\n}}\n.other {{\n}}\n",
                expanded(".q\\\"x")
            )
        );
    }

    #[test]
    fn escaped_comma_does_not_split_a_selector() {
        let result = expand("body.halloween-theme .a\\,b {}");
        assert_eq!(result.selectors, 6);
        assert_eq!(result.text, format!("{} {{}}", expanded(".a\\,b")));
    }

    #[test]
    fn escaped_brace_does_not_end_the_run() {
        let result = expand("body.halloween-theme .a\\{b, .c {}");
        assert_eq!(result.text, format!("{},\n.c {{}}", expanded(".a\\{b")));
    }

    #[test]
    fn marker_inside_a_string_is_not_a_run() {
        let css = ".tip::after { content: \"body.halloween-theme {\"; }";
        let result = expand(css);
        assert_eq!(result.text, css);
        assert_eq!(result.groups, 0);
    }

    #[test]
    fn rules_inside_media_blocks_are_expanded() {
        let css = "@media (max-width: 600px) {\n  body.halloween-theme .a, .b { }\n}";
        let result = expand(css);
        assert_eq!(
            result.text,
            format!("@media (max-width: 600px) {{\n  {},\n.b {{ }}\n}}", expanded(".a"))
        );
    }

    #[test]
    fn second_pass_expands_the_marker_again() {
        let once = expand("body.halloween-theme .a {");
        let twice = expand(&once.text);
        assert_eq!(twice.selectors, 11);
    }

    #[test]
    fn custom_theme_set_is_respected() {
        let themes = ThemeSet {
            marker: "html.old".to_string(),
            targets: vec!["html.dark".to_string(), "html.light".to_string()],
        };
        let result = expand_selectors("html.old p, a{", &themes).expect("expand");
        assert_eq!(result.text, "html.dark p,\nhtml.light p,\na{");
    }

    #[test]
    fn empty_targets_are_rejected() {
        let themes = ThemeSet {
            marker: ".old".to_string(),
            targets: Vec::new(),
        };
        assert!(expand_selectors(".old {", &themes).is_err());
    }
}
