/// Surgeon preference card as stored, referenced to its author by `user_id`.
///
/// Free-text columns are nullable. `glove_size` keeps the stored text and is
/// only coerced to a number when serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceCard {
    pub surgeon: Option<String>,
    pub procedure: Option<String>,
    pub position: Option<String>,
    pub glove_size: Option<String>,
    pub glove_type: Option<String>,
    pub dominant_hand: Option<String>,
    pub equipment: Option<String>,
    pub supplies: Option<String>,
    pub instrumentation: Option<String>,
    pub suture_and_usage: Option<String>,
    pub dressings: Option<String>,
    pub skin_prep: Option<String>,
    pub medications: Option<String>,
    pub user_id: i32,
}
