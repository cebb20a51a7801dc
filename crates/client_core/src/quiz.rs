use shared::{
    catalog,
    domain::{Destination, DestinationId},
    error::CatalogError,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizResolver {
    recommendation: Option<DestinationId>,
}

impl QuizResolver {
    pub fn choose(&mut self, value: DestinationId) {
        self.recommendation = Some(value);
    }

    /// Validated entry point for raw option keys. Unknown keys leave the
    /// current answer untouched.
    pub fn choose_key(&mut self, key: &str) -> Result<DestinationId, CatalogError> {
        let value = key.parse::<DestinationId>()?;
        self.choose(value);
        Ok(value)
    }

    pub fn reset(&mut self) {
        self.recommendation = None;
    }

    pub fn recommendation(&self) -> Option<DestinationId> {
        self.recommendation
    }

    pub fn resolve(&self) -> Option<&'static Destination> {
        self.recommendation.map(catalog::destination)
    }
}
