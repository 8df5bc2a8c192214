use serde::{Deserialize, Serialize};

/// One page of search results as the rest of the service sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub n_studies_returned: u32,
    pub n_studies_found: Option<u32>,
    pub studies: Vec<StudySummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudySummary {
    pub nct_id: String,
    pub brief_title: String,
    pub organization: String,
    pub overall_status: String,
    pub start_date: String,
}

/// Error body the registry sends along with non-200 responses.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamErrorBody {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

pub fn decode_results(body: &str) -> Result<SearchResults, serde_json::Error> {
    let envelope: wire::Envelope = serde_json::from_str(body)?;
    Ok(envelope.full_studies_response.into())
}

pub fn decode_error(body: &str) -> Result<UpstreamErrorBody, serde_json::Error> {
    serde_json::from_str(body)
}

// Mirrors of the registry's nested schema. Only the fields we render are kept.
mod wire {
    use serde::Deserialize;

    use super::{SearchResults, StudySummary};

    // Absent sections decode to empty values rather than failing the page.
    #[derive(Deserialize)]
    pub struct Envelope {
        #[serde(rename = "FullStudiesResponse", default)]
        pub full_studies_response: FullStudiesResponse,
    }

    #[derive(Deserialize, Default)]
    #[serde(rename_all = "PascalCase")]
    pub struct FullStudiesResponse {
        #[serde(rename = "NStudiesReturned", default)]
        n_studies_returned: u32,
        #[serde(rename = "NStudiesFound", default)]
        n_studies_found: Option<u32>,
        #[serde(default)]
        full_studies: Vec<FullStudy>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct FullStudy {
        #[serde(default)]
        study: Study,
    }

    #[derive(Deserialize, Default)]
    #[serde(rename_all = "PascalCase")]
    struct Study {
        #[serde(default)]
        protocol_section: ProtocolSection,
    }

    #[derive(Deserialize, Default)]
    #[serde(rename_all = "PascalCase")]
    struct ProtocolSection {
        #[serde(default)]
        identification_module: IdentificationModule,
        #[serde(default)]
        status_module: StatusModule,
    }

    #[derive(Deserialize, Default)]
    #[serde(rename_all = "PascalCase")]
    struct IdentificationModule {
        #[serde(rename = "NCTId", default)]
        nct_id: String,
        #[serde(default)]
        brief_title: String,
        #[serde(default)]
        organization: Organization,
    }

    #[derive(Deserialize, Default)]
    #[serde(rename_all = "PascalCase")]
    struct Organization {
        #[serde(default)]
        org_full_name: String,
    }

    #[derive(Deserialize, Default)]
    #[serde(rename_all = "PascalCase")]
    struct StatusModule {
        #[serde(default)]
        overall_status: String,
        #[serde(default)]
        start_date_struct: StartDateStruct,
    }

    #[derive(Deserialize, Default)]
    #[serde(rename_all = "PascalCase")]
    struct StartDateStruct {
        #[serde(default)]
        start_date: String,
    }

    impl From<FullStudiesResponse> for SearchResults {
        fn from(response: FullStudiesResponse) -> Self {
            SearchResults {
                n_studies_returned: response.n_studies_returned,
                n_studies_found: response.n_studies_found,
                studies: response
                    .full_studies
                    .into_iter()
                    .map(|full| StudySummary::from(full.study.protocol_section))
                    .collect(),
            }
        }
    }

    impl From<ProtocolSection> for StudySummary {
        fn from(section: ProtocolSection) -> Self {
            let ident = section.identification_module;
            let status = section.status_module;
            StudySummary {
                nct_id: ident.nct_id,
                brief_title: ident.brief_title,
                organization: ident.organization.org_full_name,
                overall_status: status.overall_status,
                start_date: status.start_date_struct.start_date,
            }
        }
    }
}
