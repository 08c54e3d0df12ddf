/// Line-oriented text output. Every notification is one whole line.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

/// 記錄輸出內容，方便測試與事後檢查
impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Anything that can take someone from place A to place B.
pub trait Commutable {
    fn tire_count(&self) -> u32;

    fn commute(&self, sink: &mut dyn OutputSink) {
        sink.write_line(&format!(
            "I am going from Place A to Place B using {} tires",
            self.tire_count()
        ));
    }
}
