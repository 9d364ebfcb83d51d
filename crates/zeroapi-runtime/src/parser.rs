//! High-level façade: run the parser and decode its JSON.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use zeroapi_core::{DocumentOutcome, ParsedDocument, ParserConfig, ParserResult, decode_batch};

use crate::executor::Executor;

/// Parses `.api` files into [`ParsedDocument`]s.
#[derive(Debug, Clone)]
pub struct ApiParser {
    executor: Executor,
}

impl ApiParser {
    pub const fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Parser over an auto-detected executable.
    pub fn auto_detect() -> ParserResult<Self> {
        Executor::new(None).map(Self::new)
    }

    pub fn from_config(config: &ParserConfig) -> ParserResult<Self> {
        Executor::from_config(config).map(Self::new)
    }

    pub const fn executor(&self) -> &Executor {
        &self.executor
    }

    pub const fn executor_mut(&mut self) -> &mut Executor {
        &mut self.executor
    }

    pub fn set_executor(&mut self, executor: Executor) {
        self.executor = executor;
    }

    /// Run the parser on `path` and decode the result.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> ParserResult<ParsedDocument> {
        let raw = self.executor.execute(path)?;
        ParsedDocument::decode(&raw)
    }

    /// Parse and re-serialize as JSON text.
    pub fn parse_file_to_json(&self, path: impl AsRef<Path>, pretty: bool) -> ParserResult<String> {
        self.parse_file(path)?.to_json_string(pretty)
    }

    /// Parse many files. Each entry holds a document or the failure message.
    pub fn parse_multiple_files<I, P>(&self, paths: I) -> HashMap<PathBuf, DocumentOutcome>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        decode_batch(self.executor.execute_each(paths))
    }

    pub fn info(&self, path: impl AsRef<Path>) -> ParserResult<Map<String, Value>> {
        Ok(self.parse_file(path)?.info())
    }

    pub fn syntax(&self, path: impl AsRef<Path>) -> ParserResult<Option<Value>> {
        Ok(self.parse_file(path)?.syntax().cloned())
    }

    pub fn imports(&self, path: impl AsRef<Path>) -> ParserResult<Vec<Value>> {
        Ok(self.parse_file(path)?.imports().to_vec())
    }

    pub fn types(&self, path: impl AsRef<Path>) -> ParserResult<Vec<Value>> {
        Ok(self.parse_file(path)?.types().to_vec())
    }

    pub fn service(&self, path: impl AsRef<Path>) -> ParserResult<Map<String, Value>> {
        Ok(self.parse_file(path)?.service())
    }

    pub fn groups(&self, path: impl AsRef<Path>) -> ParserResult<Vec<Value>> {
        Ok(self.parse_file(path)?.groups().to_vec())
    }
}

impl From<Executor> for ApiParser {
    fn from(executor: Executor) -> Self {
        Self::new(executor)
    }
}
