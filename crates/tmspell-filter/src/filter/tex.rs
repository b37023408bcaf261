// TeX word filter: commands, parameters, environments, math and comments
//
// The filter keeps a stack of frames. A command frame tracks where the
// command is within its declared parameter list; an environment frame marks
// an open \begin{...} (or inline math, as the synthetic environment "$").
// Words are checked or skipped depending on the parameter slot of the top
// frame and on whether any open environment is configured to be skipped.
//
// Malformed input never fails. Unmatched closers and unknown commands are
// resolved by popping the nearest applicable frame or by treating the text
// as plain, checked text.

use std::sync::Arc;

use hashbrown::HashSet;
use tmspell_core::WordSpan;

use super::scanner::Scanner;
use crate::config::{CommandTable, FilterConfig, ParamType, parse_command_filter, parse_name_list};

/// Name of the synthetic environment used for `$...$` and `$$...$$`.
const MATH_ENVIRONMENT: &str = "$";

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

/// One entry of the command/environment stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    pub name: String,
    params: Arc<[ParamType]>,
    cursor: usize,
    /// Waiting for the next `{` or `[` of this command.
    pub waiting: bool,
    pub is_environment: bool,
}

impl Frame {
    /// A command frame. Commands without a declared parameter list get an
    /// empty one, which makes all their parameters checked.
    pub fn command(name: impl Into<String>, params: Option<Arc<[ParamType]>>) -> Self {
        Self {
            name: name.into(),
            params: params.unwrap_or_else(|| Arc::from(Vec::new())),
            cursor: 0,
            waiting: true,
            is_environment: false,
        }
    }

    pub fn environment(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Arc::from(Vec::new()),
            cursor: 0,
            waiting: false,
            is_environment: true,
        }
    }

    /// The parameter slot the frame is currently in, if known.
    pub fn current(&self) -> Option<ParamType> {
        self.params.get(self.cursor).copied()
    }

    /// Are words in the current slot to be checked?
    pub fn checks_words(&self) -> bool {
        self.current().is_none_or(ParamType::is_checked)
    }

    /// Step past one parameter of the given kind.
    ///
    /// Closing a required parameter also steps over optional parameters
    /// that were declared before it but not given. Any other mismatch means
    /// the input does not follow the declaration, and the rest of the list
    /// is treated as unknown.
    pub fn advance_param(&mut self, optional: bool) {
        while let Some(param) = self.current() {
            if param.is_optional() == optional {
                self.cursor += 1;
                break;
            } else if !optional && param.is_optional() {
                self.cursor += 1;
            } else {
                self.cursor = self.params.len();
            }
        }
    }
}

/// The command/environment stack. The top of the stack is the last element.
#[derive(Debug, Clone, Default)]
pub(crate) struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Index of the nearest command frame (searching from the top).
    fn nearest_command(&self) -> Option<usize> {
        self.frames.iter().rposition(|f| !f.is_environment)
    }

    /// Index of the nearest environment frame named `name`.
    pub fn find_environment(&self, name: &str) -> Option<usize> {
        self.frames
            .iter()
            .rposition(|f| f.is_environment && f.name == name)
    }

    /// Index of the nearest environment frame of any name.
    pub fn nearest_environment(&self) -> Option<usize> {
        self.frames.iter().rposition(|f| f.is_environment)
    }

    /// Drop commands whose parameter list has ended.
    ///
    /// First, environments stacked on top of a command that is still waiting
    /// for a parameter are dropped: they were opened inside an argument that
    /// never got closed. Then every waiting command on top is dropped.
    pub fn discard_waiting(&mut self) {
        while self.len() > 1 && self.top().is_some_and(|f| f.is_environment) {
            match self.nearest_command() {
                Some(i) if self.frames[i].waiting => {
                    log::trace!("dropping environment left open inside {}", self.frames[i].name);
                    self.pop();
                }
                _ => break,
            }
        }
        while self.top().is_some_and(|f| f.waiting && !f.is_environment) {
            self.pop();
        }
    }

    /// Close the environment `name`.
    ///
    /// Removes the nearest environment with that name; if there is none,
    /// the nearest environment of any name is removed instead. Returns the
    /// removed frame, or `None` when no environment is open.
    pub fn close_environment(&mut self, name: &str) -> Option<Frame> {
        if let Some(i) = self.find_environment(name) {
            return Some(self.frames.remove(i));
        }
        let i = self.nearest_environment()?;
        log::debug!(
            "\\end{{{name}}} closes mismatched environment {}",
            self.frames[i].name
        );
        Some(self.frames.remove(i))
    }

    /// Is any open environment in `skipped`?
    pub fn in_environment_of(&self, skipped: &HashSet<String>) -> bool {
        self.frames
            .iter()
            .any(|f| f.is_environment && skipped.contains(&f.name))
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// State of the TeX dialect.
#[derive(Debug, Clone)]
pub(crate) struct TexFilter {
    commands: CommandTable,
    skipped_environments: HashSet<String>,
    stack: FrameStack,
    in_comment: bool,
}

impl TexFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            commands: parse_command_filter(&config.tex_command_filter),
            skipped_environments: parse_name_list(&config.tex_environment_filter),
            stack: FrameStack::default(),
            in_comment: false,
        }
    }

    /// A new physical line ends any comment. The frame stack carries over,
    /// since arguments and environments span lines.
    pub fn line_changed(&mut self) {
        self.in_comment = false;
    }

    /// Forget all open commands and environments.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.in_comment = false;
    }

    pub fn next_word(&mut self, sc: &mut Scanner<'_>) -> Option<WordSpan> {
        if self.in_comment {
            return None;
        }

        sc.skip_whitespace();
        while let Some(c) = sc.peek() {
            match c {
                '\\' => {
                    self.stack.discard_waiting();
                    match command_name(sc) {
                        Some(name) => self.command(sc, name),
                        None => sc.skip_n(2), // \\, \%, \{ ...
                    }
                }
                '%' => {
                    // one last plain word, then the line is dead
                    sc.advance();
                    self.in_comment = true;
                    return sc.next_plain_word();
                }
                '{' | '[' => {
                    sc.advance();
                    if let Some(top) = self.stack.top_mut() {
                        top.waiting = false;
                    }
                }
                '}' | ']' => {
                    sc.advance();
                    self.stack.discard_waiting();
                    if let Some(top) = self.stack.top_mut() {
                        top.waiting = true;
                        top.advance_param(c == ']');
                    }
                }
                _ => {
                    self.stack.discard_waiting();
                    if sc.is_at_word() {
                        if self.checks_words() {
                            return sc.next_plain_word();
                        }
                        sc.skip_over_word();
                    } else if c == '$' {
                        sc.advance();
                        if sc.is_at('$') {
                            sc.advance();
                        }
                        self.toggle_math();
                    } else {
                        sc.advance();
                    }
                }
            }
            sc.skip_whitespace();
        }
        None
    }

    /// Handle a command whose name has just been consumed.
    fn command(&mut self, sc: &mut Scanner<'_>, name: String) {
        let params = self.commands.get(&name).cloned();
        match name.as_str() {
            "begin" => {
                if let Some(env) = environment_name(sc) {
                    self.stack.push(Frame::environment(env));
                }
            }
            "end" => {
                if let Some(env) = environment_name(sc) {
                    if self.stack.close_environment(&env).is_none() {
                        log::debug!("\\end{{{env}}} without any open environment");
                    }
                }
            }
            _ => {}
        }
        // begin/end frames sit on top of their environment
        self.stack.push(Frame::command(name, params));
    }

    fn checks_words(&self) -> bool {
        !self.stack.in_environment_of(&self.skipped_environments)
            && self.stack.top().is_none_or(Frame::checks_words)
    }

    fn toggle_math(&mut self) {
        let in_math = self
            .stack
            .top()
            .is_some_and(|f| f.is_environment && f.name == MATH_ENVIRONMENT);
        if in_math {
            self.stack.close_environment(MATH_ENVIRONMENT);
        } else {
            self.stack.push(Frame::environment(MATH_ENVIRONMENT));
        }
    }

    #[cfg(test)]
    pub(crate) fn stack(&self) -> &FrameStack {
        &self.stack
    }
}

/// Match `\name` or `\name*` at the cursor, where name is `[@a-zA-Z0-9]+`.
/// On a match the cursor moves past it and the name (without `*`) is
/// returned; otherwise the cursor is left on the backslash.
fn command_name(sc: &mut Scanner<'_>) -> Option<String> {
    let line = sc.line();
    let start = sc.pos() + 1;
    let end = scan_run(line, start, |c| c.is_ascii_alphanumeric() || c == '@');
    if end == start {
        return None;
    }
    let name: String = line[start..end].iter().collect();
    sc.set_pos(if line.get(end) == Some(&'*') { end + 1 } else { end });
    Some(name)
}

/// Match `{name}` or `{name*}` at the cursor, where name is `[a-zA-Z0-9]+`.
/// The cursor only moves on a complete match.
fn environment_name(sc: &mut Scanner<'_>) -> Option<String> {
    if !sc.is_at('{') {
        return None;
    }
    let line = sc.line();
    let start = sc.pos() + 1;
    let end = scan_run(line, start, |c| c.is_ascii_alphanumeric());
    if end == start {
        return None;
    }
    let mut close = end;
    if line.get(close) == Some(&'*') {
        close += 1;
    }
    if line.get(close) != Some(&'}') {
        return None;
    }
    sc.set_pos(close + 1);
    Some(line[start..end].iter().collect())
}

/// End of the run of characters satisfying `pred` starting at `start`.
fn scan_run<F: Fn(char) -> bool>(line: &[char], start: usize, pred: F) -> usize {
    let mut i = start;
    while line.get(i).is_some_and(|&c| pred(c)) {
        i += 1;
    }
    i
}
