use uuid::Uuid;

/// Destination for raw model payloads that failed normalization, injected
/// into the services so concurrent requests never clobber a shared path.
/// Implementations must keep the raw text out of anything returned to the
/// end user.
pub trait DiagnosticSink: Send + Sync {
    fn capture(&self, context: &str, raw: &str);
}

/// Production sink: tags each payload with an artifact id and logs it. The
/// raw text only appears at debug level.
pub struct LogDiagnosticSink;

impl DiagnosticSink for LogDiagnosticSink {
    fn capture(&self, context: &str, raw: &str) {
        let artifact_id = Uuid::new_v4();
        log::error!(
            "unparseable {context} payload ({} bytes) recorded as artifact {artifact_id}",
            raw.len()
        );
        log::debug!("artifact {artifact_id}: {raw}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sink_accepts_any_payload() {
        // Smoke test: capturing must never panic, whatever the payload.
        LogDiagnosticSink.capture("quiz generation", "{\"broken\":");
        LogDiagnosticSink.capture("keyword extraction", "");
    }
}
