use crate::ports::{
    DomainRepository, RecordRepository, TldRepository, UpstreamReply, UpstreamResolver, WireCodec,
};
use opentld_domain::config::RegistryConfig;
use opentld_domain::{formatter, Answer, ResolveError};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Immutable resolution inputs that are configuration, not data: the system
/// TLD set and the per-request deadline.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub registry: RegistryConfig,
    pub deadline: Duration,
}

/// Outcome of one resolution.
pub enum Resolution {
    /// Locally produced authoritative wire response.
    Authoritative(Vec<u8>),
    /// Upstream reply to relay verbatim.
    Proxied(UpstreamReply),
}

/// The query-resolution pipeline: decode, decide authority vs proxy, look up
/// records, format answers, re-encode. Stateless per request; the only
/// suspension points are the two store reads and the upstream forward.
pub struct ResolveQueryUseCase {
    codec: Arc<dyn WireCodec>,
    tlds: Arc<dyn TldRepository>,
    domains: Arc<dyn DomainRepository>,
    records: Arc<dyn RecordRepository>,
    upstream: Arc<dyn UpstreamResolver>,
    settings: ResolverSettings,
}

impl ResolveQueryUseCase {
    pub fn new(
        codec: Arc<dyn WireCodec>,
        tlds: Arc<dyn TldRepository>,
        domains: Arc<dyn DomainRepository>,
        records: Arc<dyn RecordRepository>,
        upstream: Arc<dyn UpstreamResolver>,
        settings: ResolverSettings,
    ) -> Self {
        Self {
            codec,
            tlds,
            domains,
            records,
            upstream,
            settings,
        }
    }

    pub async fn execute(
        &self,
        raw_query: &[u8],
        provider: Option<&str>,
    ) -> Result<Resolution, ResolveError> {
        match tokio::time::timeout(self.settings.deadline, self.resolve(raw_query, provider)).await
        {
            Ok(result) => result,
            Err(_) => Err(ResolveError::Internal(
                "request deadline exceeded".to_string(),
            )),
        }
    }

    async fn resolve(
        &self,
        raw_query: &[u8],
        provider: Option<&str>,
    ) -> Result<Resolution, ResolveError> {
        let decoded = self.codec.decode(raw_query)?;
        let question = decoded.question.clone();

        let labels = question.labels();
        let Some(tld) = labels.last() else {
            return Err(ResolveError::InvalidQuery(
                "question name has no labels".to_string(),
            ));
        };

        let managed =
            self.settings.registry.is_system_tld(tld) || self.tlds.lookup(tld).await?.is_some();

        if !managed {
            debug!(name = %question.name, tld = %tld, "unmanaged TLD, forwarding upstream");
            let reply = self.upstream.forward(raw_query, provider).await?;
            return Ok(Resolution::Proxied(reply));
        }

        let Some(domain) = question.domain() else {
            // Bare-TLD query: a deliberate NXDOMAIN shortcut without a wire
            // body.
            return Err(ResolveError::NameNotResolvable);
        };

        let Some(registered) = self.domains.lookup(tld, &domain).await? else {
            // Absent domains answer NOERROR with zero answers; the wire does
            // not distinguish them from a name with no matching records.
            debug!(name = %question.name, "domain not registered, empty authoritative answer");
            let bytes = self.codec.encode(&decoded, &[])?;
            return Ok(Resolution::Authoritative(bytes));
        };

        let host = question.host();
        let records = self.records.list(registered.id, &host).await?;

        let answers: Vec<Answer> = records
            .iter()
            .filter(|record| record.answers_query(question.record_type))
            .map(|record| Answer {
                name: question.name.clone(),
                record_type: record.record_type.to_uppercase(),
                ttl: record.ttl_or_default(),
                data: formatter::format(&record.record_type, &record.value, record.priority),
            })
            .collect();

        debug!(
            name = %question.name,
            qtype = %question.record_type,
            host = %host,
            answers = answers.len(),
            "authoritative answer"
        );

        let bytes = self.codec.encode(&decoded, &answers)?;
        Ok(Resolution::Authoritative(bytes))
    }
}
