use crate::domain::diagnosis::entities::CanonicalDiagnosis;

pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

#[derive(Debug, Clone)]
pub struct DiagnoseInput {
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct SaveAnalysisInput {
    pub user_id: String,
    pub diagnosis: CanonicalDiagnosis,
    pub image_data: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub struct GetAnalysisHistoryInput {
    pub user_id: String,
    pub filter: GetAnalysisFilter,
}

#[derive(Debug, Clone, Default)]
pub struct GetAnalysisFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}
