#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse {document}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("project id {0} is used more than once")]
    DuplicateProjectId(u32),

    #[error("{document}: `{field}` must not be empty")]
    EmptyField {
        document: &'static str,
        field: &'static str,
    },

    #[error("tech level for {name} is {level}, expected 0..=100")]
    LevelOutOfRange { name: String, level: u8 },

    #[error("rating for {name} is {rating}, expected 1..=5")]
    RatingOutOfRange { name: String, rating: u8 },
}
