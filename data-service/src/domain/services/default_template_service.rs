//! Weekly default-template store: thin validation/canonicalization wrapper over
//! [`DefaultDemandRepository`].

use std::sync::Arc;

use shared::{canonicalize_template_items, DomainError, DomainResult, RawDemandItem, TemplateItem};
use uuid::Uuid;

use crate::domain::entities::DefaultDemand;
use crate::domain::repositories::DefaultDemandRepository;

pub struct DefaultTemplateService {
    repo: Arc<dyn DefaultDemandRepository>,
}

fn validate_weekday(weekday: Option<i16>) -> DomainResult<Option<i16>> {
    match weekday {
        Some(w) if !(0..=6).contains(&w) => Err(DomainError::ValidationFailure(format!("weekday {w} out of range 0..6"))),
        other => Ok(other),
    }
}

impl DefaultTemplateService {
    pub fn new(repo: Arc<dyn DefaultDemandRepository>) -> Self {
        Self { repo }
    }

    pub async fn upsert(
        &self,
        tenant_id: Uuid,
        location: &str,
        weekday: Option<i16>,
        raw_items: Vec<RawDemandItem>,
    ) -> DomainResult<DefaultDemand> {
        let weekday = validate_weekday(weekday)?;
        let items = canonicalize_template_items(&raw_items);
        if items.is_empty() {
            return Err(DomainError::ValidationFailure("template items normalize to empty".to_string()));
        }
        self.repo.upsert(tenant_id, location, weekday, items).await
    }

    /// Returns the template for `weekday`, with `inherited = true` when the exact-weekday
    /// row is absent and the wildcard fallback is used instead.
    pub async fn find_with_fallback(
        &self,
        tenant_id: Uuid,
        location: &str,
        weekday: i16,
    ) -> DomainResult<Option<(DefaultDemand, bool)>> {
        validate_weekday(Some(weekday))?;
        self.repo.find_with_fallback(tenant_id, location, weekday).await
    }

    /// All rows for `location`, suitable for `GET /demand/default/week`: one entry per
    /// weekday 0..6, each `inherited` if only the wildcard row backs it.
    pub async fn week(&self, tenant_id: Uuid, location: &str) -> DomainResult<Vec<(i16, Vec<TemplateItem>, bool)>> {
        let mut out = Vec::with_capacity(7);
        for weekday in 0..7 {
            match self.repo.find_with_fallback(tenant_id, location, weekday).await? {
                Some((row, inherited)) => out.push((weekday, row.items.0.clone(), inherited)),
                None => out.push((weekday, Vec::new(), true)),
            }
        }
        Ok(out)
    }

    pub async fn replace_bulk(
        &self,
        tenant_id: Uuid,
        location: &str,
        entries: Vec<(Option<i16>, Vec<RawDemandItem>)>,
    ) -> DomainResult<Vec<DefaultDemand>> {
        let mut canonical = Vec::with_capacity(entries.len());
        for (weekday, raw) in entries {
            let weekday = validate_weekday(weekday)?;
            canonical.push((weekday, canonicalize_template_items(&raw)));
        }
        self.repo.replace_bulk(tenant_id, location, canonical).await
    }
}
