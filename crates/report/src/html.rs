//! HTML report - one table row per road, busiest road first.

use roadworks_analysis::{DurationSummary, RoadworksAnalysis};
use roadworks_core::{fields, WorkOrder};

use crate::{ReportError, Result};

/// HTML report formatter.
#[derive(Debug)]
pub struct HtmlReport<'a> {
    analysis: &'a RoadworksAnalysis,
}

impl<'a> HtmlReport<'a> {
    /// Create a formatter for `analysis`.
    pub fn new(analysis: &'a RoadworksAnalysis) -> Self {
        Self { analysis }
    }

    /// Escape HTML special characters
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    fn generate_styles() -> &'static str {
        r#"
        body { font-family: Arial, sans-serif; margin: 20px; }
        h2 { background-color: #f4f4f4; padding: 10px; border-radius: 5px; }
        table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; vertical-align: top; }
        th { background-color: #007bff; color: white; }
        "#
    }

    /// Render the complete document.
    pub fn render(&self) -> Result<String> {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str("    <title>Planned Roadworks</title>\n");
        html.push_str(&format!("    <style>{}</style>\n", Self::generate_styles()));
        html.push_str("</head>\n<body>\n    <h1>Planned Roadworks</h1>\n");

        html.push_str(&self.render_table()?);

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }

    fn render_table(&self) -> Result<String> {
        let mut table = String::new();
        table.push_str("    <table>\n        <tr>\n");
        table.push_str("            <th>Road</th>\n");
        table.push_str("            <th>Total planned works</th>\n");
        table.push_str("            <th>Longest work</th>\n");
        table.push_str(&format!(
            "            <th style=\"min-width: 500px\">Significant works ({} days or more)</th>\n",
            self.analysis.threshold_days
        ));
        table.push_str("        </tr>\n");

        for group in &self.analysis.grouped {
            let longest = self
                .analysis
                .longest
                .get(&group.key)
                .ok_or_else(|| ReportError::MissingRoad(group.key.clone()))?;
            let significant = self
                .analysis
                .significant
                .get(&group.key)
                .map(Vec::as_slice)
                .unwrap_or_default();

            table.push_str("        <tr>\n");
            table.push_str(&format!("            <td>{}</td>\n", Self::escape_html(&group.key)));
            table.push_str(&format!("            <td>{}</td>\n", group.len()));
            table.push_str(&format!("            <td>{}</td>\n", Self::render_longest(longest)));
            table.push_str(&format!(
                "            <td>{}</td>\n",
                Self::render_significant(significant)?
            ));
            table.push_str("        </tr>\n");
        }

        table.push_str("    </table>\n");
        Ok(table)
    }

    fn render_longest(summary: &DurationSummary) -> String {
        let e = Self::escape_html;
        format!(
            "<ul>\
             <li>Duration: {} days</li>\
             <li>Description: {}</li>\
             <li>Traffic management: {}</li>\
             <li>Closure type: {}</li>\
             <li>Local authority: {}</li>\
             <li>Start: {}, end: {}</li>\
             <li>Reference number: {}</li>\
             <li>Location: {}</li>\
             <li>Expected delay: {}</li>\
             </ul>",
            summary.max_days,
            e(&summary.description),
            e(&summary.traffic_management),
            e(&summary.closure_type),
            e(&summary.local_authority),
            e(&summary.start_date),
            e(&summary.end_date),
            e(&summary.reference_number),
            e(&summary.location),
            e(&summary.expected_delay),
        )
    }

    fn render_significant(works: &[WorkOrder]) -> Result<String> {
        let e = Self::escape_html;
        let mut list = String::from("<ul>");
        for work in works {
            let days = work.duration_days()?;
            list.push_str(&format!(
                "<li>Ref: <strong>{}</strong><ul>\
                 <li>Duration: {} days</li>\
                 <li>Location: {}</li>\
                 <li>Expected delay: {}</li>\
                 <li>Traffic management: {}</li>\
                 </ul></li><br>",
                e(work.reference_number()),
                days,
                e(work.field(fields::LOCATION)),
                e(work.field(fields::EXPECTED_DELAY)),
                e(work.field(fields::TRAFFIC_MANAGEMENT)),
            ));
        }
        list.push_str("</ul>");
        Ok(list)
    }
}
