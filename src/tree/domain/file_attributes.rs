/// FileAttributes value object holding the metadata only files carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttributes {
    unit_test: bool,
    language_key: Option<String>,
    lines: u32,
}

impl FileAttributes {
    pub fn new(unit_test: bool, language_key: Option<String>, lines: u32) -> Self {
        Self {
            unit_test,
            language_key,
            lines,
        }
    }

    pub fn is_unit_test(&self) -> bool {
        self.unit_test
    }

    pub fn language_key(&self) -> Option<&str> {
        self.language_key.as_deref()
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }
}
