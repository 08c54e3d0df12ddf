use crate::domain::ports::OutputSink;

/// 直接輸出到標準輸出
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Routes notifications into the tracing pipeline as info events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn write_line(&mut self, line: &str) {
        tracing::info!("{}", line);
    }
}
