//! Filter collection
//!
//! Builds the ordered filter list for a repository query. Each `with_*`
//! method gates on the presence of its input: an absent parameter appends
//! nothing, a present one appends exactly one filter. Filters come out in
//! invocation order.

use tracing::debug;
use variation_commons_core::{Region, VariantType};

use super::types::{Filter, RelationalOperator};

/// Collects filters for querying through the variant repository
#[derive(Debug, Clone, Default)]
pub struct FilterCollector {
    filters: Vec<Filter>,
}

impl FilterCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles the filter list for a general variant search.
    pub fn variant_query_filters(
        self,
        maf: Option<&str>,
        polyphen_score: Option<&str>,
        sift_score: Option<&str>,
        studies: Option<&[String]>,
        consequence_types: Option<&[String]>,
    ) -> Vec<Filter> {
        let filters = self
            .with_maf(maf)
            .with_polyphen_score(polyphen_score)
            .with_sift_score(sift_score)
            .with_studies(studies)
            .with_consequence_types(consequence_types)
            .build();
        debug!(count = filters.len(), "collected variant query filters");
        filters
    }

    /// Assembles the filter list for a beacon allele lookup.
    ///
    /// `start_range` and `end_range` bound the variant's start and end
    /// coordinates; each bound present in a range contributes one filter.
    pub fn beacon_filters(
        self,
        start_range: &Region,
        end_range: &Region,
        reference_bases: Option<&str>,
        alternate_bases: Option<&str>,
        variant_type: Option<VariantType>,
        studies: Option<&[String]>,
    ) -> Vec<Filter> {
        let filters = self
            .with_start(start_range)
            .with_end(end_range)
            .with_reference_bases(reference_bases)
            .with_alternate(alternate_bases)
            .with_variant_type(variant_type)
            .with_studies(studies)
            .build();
        debug!(count = filters.len(), "collected beacon filters");
        filters
    }

    /// Returns the accumulated filters; the collector is spent.
    pub fn build(self) -> Vec<Filter> {
        self.filters
    }

    pub fn with_maf(mut self, maf: Option<&str>) -> Self {
        if let Some(maf) = maf
            && !maf.is_empty()
        {
            self.filters.push(Filter::Maf {
                value: maf.to_string(),
            });
        }
        self
    }

    pub fn with_polyphen_score(mut self, polyphen_score: Option<&str>) -> Self {
        if let Some(polyphen_score) = polyphen_score
            && !polyphen_score.is_empty()
        {
            self.filters.push(Filter::PolyphenScore {
                value: polyphen_score.to_string(),
            });
        }
        self
    }

    pub fn with_sift_score(mut self, sift_score: Option<&str>) -> Self {
        if let Some(sift_score) = sift_score
            && !sift_score.is_empty()
        {
            self.filters.push(Filter::SiftScore {
                value: sift_score.to_string(),
            });
        }
        self
    }

    pub fn with_studies(mut self, studies: Option<&[String]>) -> Self {
        if let Some(studies) = studies
            && !studies.is_empty()
        {
            self.filters.push(Filter::Study {
                studies: studies.to_vec(),
            });
        }
        self
    }

    pub fn with_consequence_types(mut self, consequence_types: Option<&[String]>) -> Self {
        if let Some(terms) = consequence_types
            && !terms.is_empty()
        {
            self.filters.push(Filter::ConsequenceType {
                terms: terms.to_vec(),
            });
        }
        self
    }

    pub fn with_files(mut self, files: Option<&[String]>) -> Self {
        if let Some(files) = files
            && !files.is_empty()
        {
            self.filters.push(Filter::File {
                files: files.to_vec(),
            });
        }
        self
    }

    pub fn with_variant_types(mut self, types: Option<&[VariantType]>) -> Self {
        if let Some(types) = types
            && !types.is_empty()
        {
            self.filters.push(Filter::VariantType {
                types: types.to_vec(),
            });
        }
        self
    }

    /// Single-type form of [`with_variant_types`](Self::with_variant_types).
    pub fn with_variant_type(mut self, variant_type: Option<VariantType>) -> Self {
        if let Some(variant_type) = variant_type {
            self.filters.push(Filter::VariantType {
                types: vec![variant_type],
            });
        }
        self
    }

    pub fn with_alternates(mut self, alternates: Option<&[String]>) -> Self {
        if let Some(alternates) = alternates
            && !alternates.is_empty()
        {
            self.filters.push(Filter::Alternate {
                alternates: alternates.to_vec(),
            });
        }
        self
    }

    /// Single-allele form of [`with_alternates`](Self::with_alternates).
    ///
    /// Unlike the list form this appends for any supplied value, the empty
    /// string included. Callers relying on empty-as-absent must use the list
    /// form.
    pub fn with_alternate(mut self, alternate: Option<&str>) -> Self {
        if let Some(alternate) = alternate {
            self.filters.push(Filter::Alternate {
                alternates: vec![alternate.to_string()],
            });
        }
        self
    }

    /// Appends for any supplied value, the empty string included, matching
    /// [`with_alternate`](Self::with_alternate).
    pub fn with_reference_bases(mut self, reference_bases: Option<&str>) -> Self {
        if let Some(bases) = reference_bases {
            self.filters.push(Filter::ReferenceBases {
                bases: vec![bases.to_string()],
            });
        }
        self
    }

    /// Bounds the variant start coordinate by the given range. Each bound
    /// present in the range contributes one filter, so this appends zero,
    /// one or two.
    pub fn with_start(mut self, start_range: &Region) -> Self {
        if let Some(start) = start_range.start {
            self.filters.push(Filter::Start {
                value: start,
                operator: RelationalOperator::Gte,
            });
        }
        if let Some(end) = start_range.end {
            self.filters.push(Filter::Start {
                value: end,
                operator: RelationalOperator::Lte,
            });
        }
        self
    }

    /// Bounds the variant end coordinate by the given range, as
    /// [`with_start`](Self::with_start) does for the start coordinate.
    pub fn with_end(mut self, end_range: &Region) -> Self {
        if let Some(start) = end_range.start {
            self.filters.push(Filter::End {
                value: start,
                operator: RelationalOperator::Gte,
            });
        }
        if let Some(end) = end_range.end {
            self.filters.push(Filter::End {
                value: end,
                operator: RelationalOperator::Lte,
            });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn threshold_appenders_skip_none_and_empty() {
        let filters = FilterCollector::new()
            .with_maf(None)
            .with_maf(Some(""))
            .with_polyphen_score(None)
            .with_polyphen_score(Some(""))
            .with_sift_score(None)
            .with_sift_score(Some(""))
            .build();
        assert!(filters.is_empty());
    }

    #[test]
    fn threshold_appenders_keep_values_verbatim() {
        let filters = FilterCollector::new()
            .with_maf(Some("<0.01"))
            .with_polyphen_score(Some(">0.85"))
            .with_sift_score(Some("<=0.05"))
            .build();
        assert_eq!(
            filters,
            vec![
                Filter::Maf {
                    value: "<0.01".to_string()
                },
                Filter::PolyphenScore {
                    value: ">0.85".to_string()
                },
                Filter::SiftScore {
                    value: "<=0.05".to_string()
                },
            ]
        );
    }

    #[test]
    fn list_appenders_skip_none_and_empty() {
        let empty: Vec<String> = vec![];
        let no_types: Vec<VariantType> = vec![];
        let filters = FilterCollector::new()
            .with_studies(None)
            .with_studies(Some(&empty))
            .with_consequence_types(Some(&empty))
            .with_files(Some(&empty))
            .with_variant_types(Some(&no_types))
            .with_alternates(Some(&empty))
            .build();
        assert!(filters.is_empty());
    }

    #[test]
    fn list_appenders_preserve_element_order() {
        let studies = strings(&["PRJEB2", "PRJEB1"]);
        let files = strings(&["f2", "f1"]);
        let filters = FilterCollector::new()
            .with_studies(Some(&studies))
            .with_files(Some(&files))
            .build();
        assert_eq!(
            filters,
            vec![
                Filter::Study { studies },
                Filter::File { files },
            ]
        );
    }

    #[test]
    fn single_variant_type_wraps_into_singleton_list() {
        let single = FilterCollector::new()
            .with_variant_type(Some(VariantType::Indel))
            .build();
        let list = FilterCollector::new()
            .with_variant_types(Some(&[VariantType::Indel]))
            .build();
        assert_eq!(single, list);
        assert_eq!(
            FilterCollector::new().with_variant_type(None).build(),
            vec![]
        );
    }

    #[test]
    fn single_alternate_appends_even_when_empty() {
        let filters = FilterCollector::new().with_alternate(Some("")).build();
        assert_eq!(
            filters,
            vec![Filter::Alternate {
                alternates: vec![String::new()]
            }]
        );
        assert!(FilterCollector::new().with_alternate(None).build().is_empty());
    }

    #[test]
    fn reference_bases_appends_even_when_empty() {
        let filters = FilterCollector::new()
            .with_reference_bases(Some(""))
            .build();
        assert_eq!(
            filters,
            vec![Filter::ReferenceBases {
                bases: vec![String::new()]
            }]
        );
        assert!(
            FilterCollector::new()
                .with_reference_bases(None)
                .build()
                .is_empty()
        );
    }

    #[test]
    fn single_alternate_matches_singleton_list_form() {
        let single = FilterCollector::new().with_alternate(Some("T")).build();
        let alternates = strings(&["T"]);
        let list = FilterCollector::new()
            .with_alternates(Some(&alternates))
            .build();
        assert_eq!(single, list);
    }

    #[test]
    fn start_range_with_both_bounds_yields_two_filters() {
        let filters = FilterCollector::new()
            .with_start(&Region::range(Some(100), Some(200)))
            .build();
        assert_eq!(
            filters,
            vec![
                Filter::Start {
                    value: 100,
                    operator: RelationalOperator::Gte
                },
                Filter::Start {
                    value: 200,
                    operator: RelationalOperator::Lte
                },
            ]
        );
    }

    #[test]
    fn end_range_with_single_bound_yields_one_filter() {
        let lower_only = FilterCollector::new()
            .with_end(&Region::range(Some(50), None))
            .build();
        assert_eq!(
            lower_only,
            vec![Filter::End {
                value: 50,
                operator: RelationalOperator::Gte
            }]
        );

        let upper_only = FilterCollector::new()
            .with_end(&Region::range(None, Some(300)))
            .build();
        assert_eq!(
            upper_only,
            vec![Filter::End {
                value: 300,
                operator: RelationalOperator::Lte
            }]
        );
    }

    #[test]
    fn empty_range_yields_nothing() {
        let filters = FilterCollector::new()
            .with_start(&Region::range(None, None))
            .with_end(&Region::range(None, None))
            .build();
        assert!(filters.is_empty());
    }

    #[test]
    fn output_order_matches_invocation_order() {
        let studies = strings(&["S1"]);
        let filters = FilterCollector::new()
            .with_studies(Some(&studies))
            .with_maf(Some("0.01"))
            .with_sift_score(None)
            .with_variant_type(Some(VariantType::Snv))
            .build();
        assert_eq!(
            filters,
            vec![
                Filter::Study { studies },
                Filter::Maf {
                    value: "0.01".to_string()
                },
                Filter::VariantType {
                    types: vec![VariantType::Snv]
                },
            ]
        );
    }

    #[test]
    fn clones_build_equal_sequences() {
        let collector = FilterCollector::new()
            .with_maf(Some("0.05"))
            .with_reference_bases(Some("A"));
        assert_eq!(collector.clone().build(), collector.build());
    }

    #[test]
    fn variant_query_filters_scenario() {
        let studies = strings(&["S1", "S2"]);
        let filters = FilterCollector::new().variant_query_filters(
            Some("0.01"),
            None,
            Some(""),
            Some(&studies),
            None,
        );
        assert_eq!(
            filters,
            vec![
                Filter::Maf {
                    value: "0.01".to_string()
                },
                Filter::Study { studies },
            ]
        );
    }

    #[test]
    fn beacon_filters_scenario() {
        let studies: Vec<String> = vec![];
        let filters = FilterCollector::new().beacon_filters(
            &Region::range(Some(100), Some(200)),
            &Region::range(None, Some(300)),
            Some("A"),
            Some("T"),
            Some(VariantType::Snv),
            Some(&studies),
        );
        assert_eq!(
            filters,
            vec![
                Filter::Start {
                    value: 100,
                    operator: RelationalOperator::Gte
                },
                Filter::Start {
                    value: 200,
                    operator: RelationalOperator::Lte
                },
                Filter::End {
                    value: 300,
                    operator: RelationalOperator::Lte
                },
                Filter::ReferenceBases {
                    bases: vec!["A".to_string()]
                },
                Filter::Alternate {
                    alternates: vec!["T".to_string()]
                },
                Filter::VariantType {
                    types: vec![VariantType::Snv]
                },
            ]
        );
    }

    #[test]
    fn no_input_yields_empty_filter_list() {
        let filters =
            FilterCollector::new().variant_query_filters(None, None, None, None, None);
        assert!(filters.is_empty());
    }
}
