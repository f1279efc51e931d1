//! Floor-plan synchronization with the backend.
//!
//! Sections are pushed one at a time to `POST /secoes/`; a failed request
//! never aborts the run, it only counts against the final report. The
//! payload mapping and report tallying are pure so they test natively.

#![allow(clippy::unused_async)]

use canvas::doc::Section;

use super::types::SectionPayload;

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

/// Outcome of a full layout push.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub success: usize,
    pub failed: usize,
}

impl SyncReport {
    pub fn record(&mut self, ok: bool) {
        if ok {
            self.success += 1;
        } else {
            self.failed += 1;
        }
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Summary line shown in the status bar after a sync run.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Sincronizacao finalizada. Sucesso: {}, Falhas: {}.",
            self.success, self.failed
        )
    }
}

/// Map a section to the backend create payload, rounding pixel geometry to
/// the integers the backend stores.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn section_payload(section: &Section) -> SectionPayload {
    SectionPayload {
        nome: section.name.clone(),
        pos_x: section.x.round() as i64,
        pos_y: section.y.round() as i64,
        largura: section.w.round() as i64,
        altura: section.h.round() as i64,
        cor_padrao: section.color.clone(),
    }
}

/// Push every section to the backend sequentially and tally the outcomes.
pub async fn sync_layout(base_url: &str, token: &str, sections: &[Section]) -> SyncReport {
    let mut report = SyncReport::default();
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{base_url}/secoes/");
        let bearer = format!("Bearer {token}");
        for section in sections {
            let payload = section_payload(section);
            let sent = gloo_net::http::Request::post(&url)
                .header("Authorization", &bearer)
                .json(&payload);
            let ok = match sent {
                Ok(request) => match request.send().await {
                    Ok(resp) => resp.ok(),
                    Err(_) => false,
                },
                Err(_) => false,
            };
            report.record(ok);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_url, token);
        for _ in sections {
            report.record(false);
        }
    }
    report
}
