//! Rendering of inference results.
//!
//! The text layout matches the established report format: one block per
//! person, gene counts listed 2, 1, 0 and trait values True, False, all
//! to four decimal places. JSON output is the same data, serialized.

use hd_common::{OutputFormat, Result};
use std::fmt::Write;

use crate::inference::PersonPosterior;

/// Render posteriors in the requested format.
pub fn render(posteriors: &[PersonPosterior], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(posteriors)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(posteriors)?),
    }
}

fn render_text(posteriors: &[PersonPosterior]) -> String {
    let mut out = String::new();
    for posterior in posteriors {
        // Infallible writes into a String.
        let _ = writeln!(out, "{}:", posterior.name);
        let _ = writeln!(out, "  Gene:");
        for count in (0..3usize).rev() {
            let _ = writeln!(out, "    {}: {:.4}", count, posterior.gene[count]);
        }
        let _ = writeln!(out, "  Trait:");
        let _ = writeln!(out, "    True: {:.4}", posterior.has_trait[1]);
        let _ = writeln!(out, "    False: {:.4}", posterior.has_trait[0]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PersonPosterior> {
        vec![PersonPosterior {
            name: "Harry".into(),
            gene: [0.5351, 0.4557, 0.0092],
            has_trait: [0.7335, 0.2665],
        }]
    }

    #[test]
    fn text_layout_lists_counts_descending() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        let expected = "\
Harry:
  Gene:
    2: 0.0092
    1: 0.4557
    0: 0.5351
  Trait:
    True: 0.2665
    False: 0.7335
";
        assert_eq!(text, expected);
    }

    #[test]
    fn json_exposes_named_distributions() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "Harry");
        assert_eq!(parsed[0]["gene"].as_array().unwrap().len(), 3);
        assert_eq!(parsed[0]["trait"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn empty_results_render_empty() {
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
    }
}
