// ABOUTME: Enhancer: selects the page mode from the URL and runs the matching pipeline.
// ABOUTME: Grade overview = normalize, re-query, average, annotate; registration = highlight.

use chrono::Datelike;
use dom_query::Document;
use qis_grades::mode::{STATE_PARAM, UNKNOWN_PAGE_MESSAGE};
use qis_grades::{assess, normalize, NormalizeRules, PageMode};
use url::Url;

use crate::config::EnhancerConfig;
use crate::dom::header::annotate_grade_header;
use crate::dom::highlight::highlight_completed;
use crate::dom::table::{apply_directives, snapshot_rows};
use crate::error::EnhanceError;
use crate::options::EnhancerBuilder;
use crate::report::{Enhanced, GradeReport};
use crate::selectors::compile;

/// Reads the `state` query parameter of `url` and maps it to a page mode.
pub fn page_mode(url: &str) -> Result<PageMode, EnhanceError> {
    let parsed = Url::parse(url)
        .map_err(|e| EnhanceError::invalid_url(url, "select page mode", Some(e.into())))?;
    let state = parsed
        .query_pairs()
        .find(|(key, _)| key == STATE_PARAM)
        .map(|(_, value)| value.into_owned());
    Ok(PageMode::from_state(state.as_deref()))
}

#[derive(Debug, Clone, Default)]
pub struct Enhancer {
    config: EnhancerConfig,
}

impl Enhancer {
    pub fn new(config: EnhancerConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> EnhancerBuilder {
        EnhancerBuilder::new()
    }

    /// Rewrites `html`, the page served at `url`.
    ///
    /// An unrecognised page is returned unchanged; only a malformed URL or
    /// an invalid configured selector is an error.
    pub fn enhance(&self, html: &str, url: &str) -> Result<Enhanced, EnhanceError> {
        let mode = page_mode(url)?;
        match mode {
            PageMode::GradeOverview => {
                let doc = Document::from(html);
                let report = self.enhance_grade_overview(&doc)?;
                Ok(Enhanced {
                    mode,
                    html: doc.html().to_string(),
                    grades: Some(report),
                    highlighted: None,
                })
            }
            PageMode::ExamRegistration => {
                let doc = Document::from(html);
                let count = self.enhance_exam_registration(&doc)?;
                Ok(Enhanced {
                    mode,
                    html: doc.html().to_string(),
                    grades: None,
                    highlighted: Some(count),
                })
            }
            PageMode::Unknown => {
                tracing::info!("{}", UNKNOWN_PAGE_MESSAGE);
                Ok(Enhanced::unchanged(html))
            }
        }
    }

    /// Cleans the grade table, then averages the rows that are left.
    pub fn enhance_grade_overview(&self, doc: &Document) -> Result<GradeReport, EnhanceError> {
        let cfg = &self.config;
        let rows_matcher = compile(&cfg.selectors.grade_rows)?;
        let header_matcher = compile(&cfg.selectors.grade_header)?;
        let rules = NormalizeRules {
            layout: cfg.layout.clone(),
            vocabulary: cfg.vocabulary.clone(),
            palette: cfg.palette.clone(),
            year: self.year(),
        };

        let mut report = GradeReport::default();
        {
            let selection = doc.select_matcher(&rows_matcher);
            let nodes = selection.nodes();
            let rows = snapshot_rows(nodes);
            report.rows_seen = rows.len();
            report.directives = normalize(&rows, &rules);
            let stats = apply_directives(nodes, &report.directives, &cfg.layout);
            report.removed = stats.removed;
            report.painted = stats.painted;
            tracing::debug!(
                rows = rows.len(),
                removed = stats.removed,
                painted = stats.painted,
                "normalized grade table"
            );
        }

        // Re-query so removed rows are gone from the averaged set.
        let selection = doc.select_matcher(&rows_matcher);
        let rows = snapshot_rows(selection.nodes());
        report.record_assessment(assess(&rows, &cfg.layout));
        tracing::debug!(
            included = report.included.len(),
            excluded = report.excluded.len(),
            average = ?report.average,
            "computed weighted average"
        );

        let average = report.average.unwrap_or(f64::NAN);
        report.header_annotated =
            annotate_grade_header(doc, &header_matcher, &cfg.vocabulary.grade_header, average);
        Ok(report)
    }

    pub fn enhance_exam_registration(&self, doc: &Document) -> Result<usize, EnhanceError> {
        let cfg = &self.config;
        let anchors = compile(&cfg.selectors.completed_courses)?;
        let count = highlight_completed(
            doc,
            &anchors,
            &cfg.vocabulary.completed_marker,
            &cfg.palette.completed,
        );
        tracing::debug!(count, "highlighted completed courses");
        Ok(count)
    }

    fn year(&self) -> i32 {
        self.config
            .year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_mode_from_query() {
        assert_eq!(
            page_mode("https://qis.example.de/qisserver/rds?state=notenspiegelStudent&next=list.vm")
                .unwrap(),
            PageMode::GradeOverview
        );
        assert_eq!(
            page_mode("https://qis.example.de/qisserver/rds?state=prfAnmStudent").unwrap(),
            PageMode::ExamRegistration
        );
        assert_eq!(
            page_mode("https://qis.example.de/qisserver/rds?state=user&type=0").unwrap(),
            PageMode::Unknown
        );
        assert_eq!(
            page_mode("https://qis.example.de/").unwrap(),
            PageMode::Unknown
        );
    }

    #[test]
    fn test_first_state_parameter_wins() {
        assert_eq!(
            page_mode("https://qis.example.de/rds?state=prfAnmStudent&state=notenspiegelStudent")
                .unwrap(),
            PageMode::ExamRegistration
        );
    }

    #[test]
    fn test_malformed_url_is_an_error() {
        let err = page_mode("rds?state=notenspiegelStudent").unwrap_err();
        assert!(err.is_invalid_url());
    }

    #[test]
    fn test_unknown_page_is_returned_verbatim() {
        let html = "<html><body><p>Hallo</p></body></html>";
        let out = Enhancer::default()
            .enhance(html, "https://qis.example.de/rds?state=user")
            .unwrap();
        assert_eq!(out.mode, PageMode::Unknown);
        assert_eq!(out.html, html);
        assert!(out.grades.is_none());
    }

    #[test]
    fn test_invalid_configured_selector_is_reported() {
        let mut selectors = crate::config::Selectors::default();
        selectors.grade_rows = "tr[[".to_string();
        let err = Enhancer::builder()
            .selectors(selectors)
            .build()
            .enhance("<table></table>", "https://qis.example.de/rds?state=notenspiegelStudent")
            .unwrap_err();
        assert!(err.is_invalid_selector());
    }
}
