/// Column-tracking text sink for emitted C++.
///
/// Every character of output passes through here so tab stops and
/// alignment can be computed from the tracked column without re-scanning
/// what was already written. Whitespace runs are buffered: a run at the
/// start of a line is committed as tabs (per the destination tab stop)
/// plus remainder spaces, a mid-line run as plain spaces, and a run
/// immediately before a line break is dropped.
#[derive(Debug)]
pub struct TargetWriter {
    out: String,
    tab_stop: Option<u32>,
    column: u32,
    pending: u32,
    line_has_text: bool,
}

const FALLBACK_TAB_STOP: u32 = 4;

impl TargetWriter {
    pub fn new(tab_stop: Option<u32>) -> Self {
        Self {
            out: String::new(),
            tab_stop,
            column: 0,
            pending: 0,
            line_has_text: false,
        }
    }

    /// Current visual column, counting buffered whitespace.
    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn write_char(&mut self, c: char) {
        match c {
            '\n' => {
                self.pending = 0;
                self.out.push('\n');
                self.column = 0;
                self.line_has_text = false;
            }
            '\r' => {
                self.pending = 0;
                self.out.push('\r');
            }
            ' ' => {
                self.pending += 1;
                self.column += 1;
            }
            '\t' => {
                // The transcriber pre-expands source tabs, so a raw tab
                // here is a request to jump to the next destination stop.
                let stop = self.tab_stop.unwrap_or(FALLBACK_TAB_STOP);
                let target = (self.column / stop + 1) * stop;
                self.pending += target - self.column;
                self.column = target;
            }
            c => {
                self.flush_pending();
                self.out.push(c);
                self.column += 1;
                self.line_has_text = true;
            }
        }
    }

    pub fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.write_char(c);
        }
    }

    pub fn finish(mut self) -> String {
        self.flush_pending();
        self.out
    }

    fn flush_pending(&mut self) {
        if self.pending == 0 {
            return;
        }
        match self.tab_stop {
            // A leading run always starts at column 0, so tab-stop
            // arithmetic reduces to division.
            Some(stop) if !self.line_has_text => {
                for _ in 0..self.pending / stop {
                    self.out.push('\t');
                }
                for _ in 0..self.pending % stop {
                    self.out.push(' ');
                }
            }
            _ => {
                for _ in 0..self.pending {
                    self.out.push(' ');
                }
            }
        }
        self.pending = 0;
    }
}
