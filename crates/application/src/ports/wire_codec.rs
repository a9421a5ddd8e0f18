use opentld_domain::{Answer, Question, ResolveError};

/// A decoded inbound message: everything the pipeline needs to answer and
/// echo correctly.
#[derive(Debug, Clone)]
pub struct DecodedQuery {
    pub id: u16,
    pub recursion_desired: bool,
    pub question: Question,
}

/// Wire-format boundary. Decoding failures are `InvalidQuery`; encoding is
/// expected to succeed for any answer set the formatter produces.
pub trait WireCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedQuery, ResolveError>;

    /// Encode an authoritative response: echo ID, question and RD, set AA.
    fn encode(&self, query: &DecodedQuery, answers: &[Answer]) -> Result<Vec<u8>, ResolveError>;
}
