use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HomeParams {
    pub notice: Option<String>,
}
