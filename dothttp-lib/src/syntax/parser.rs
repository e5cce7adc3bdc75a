use super::{
    chaining::analyze_request,
    diagnostic::{
        DiagnosticDescriptor, SourceLocation, INVALID_HEADER, MISSING_CONTENT_TYPE,
        REQUEST_LINE_ERROR,
    },
    keywords::{CONTENT_TYPE_HEADER, DIRECTIVE_NAME, QUERY_CONTINUATION, VARIABLE_PREFIX},
    lines::{
        classify, is_explicit_request_line, parse_body_file_reference, parse_header,
        parse_request_line, LineKind,
    },
    parse_context::ParseContext,
    parser_state::ParserState,
};
use crate::debug_log;
use crate::model::{CaseInsensitiveMap, DotHttpFile, DotHttpRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Warn when a request has a body but no `Content-Type` header.
    pub check_body_content_type: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            check_body_content_type: true,
        }
    }
}

/// Parses `content` with the default options. Never fails: problems are
/// reported in the returned file's `diagnostics`.
pub fn parse(file_path: Option<&str>, content: &str) -> DotHttpFile {
    parse_with_options(file_path, content, ParseOptions::default())
}

pub fn parse_with_options(
    file_path: Option<&str>,
    content: &str,
    options: ParseOptions,
) -> DotHttpFile {
    let lines = split_lines(content);
    Parser::new(options).parse_lines(file_path, &lines)
}

/// Parses lines that the caller already split and normalized.
pub fn parse_lines(file_path: Option<&str>, lines: &[&str]) -> DotHttpFile {
    Parser::new(ParseOptions::default()).parse_lines(file_path, lines)
}

/// Splits on `\n`, dropping a trailing `\r` from each line.
pub fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }
    content
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn parse_lines(&self, file_path: Option<&str>, lines: &[&str]) -> DotHttpFile {
        let file = DotHttpFile::new(file_path.map(str::to_string));
        Session::new(ParseContext::new(file, lines), self.options).run()
    }
}

/// What has been collected for a request whose request line has not been
/// seen yet.
#[derive(Debug, Default)]
struct PendingRequest {
    title: Option<String>,
    name: Option<String>,
    comments: Vec<String>,
    variables: CaseInsensitiveMap,
    in_block: bool,
}

struct Session<'a> {
    ctx: ParseContext<'a>,
    options: ParseOptions,
    state: ParserState,
    pending: PendingRequest,
    current: Option<DotHttpRequest>,
    headers_seen: bool,
    body_lines: Vec<&'a str>,
    body_start_line: usize,
    /// Set after a malformed request line; lines are dropped until the next
    /// `###` or explicit request line.
    skipping: bool,
}

impl<'a> Session<'a> {
    fn new(ctx: ParseContext<'a>, options: ParseOptions) -> Self {
        Self {
            ctx,
            options,
            state: ParserState::Start,
            pending: PendingRequest::default(),
            current: None,
            headers_seen: false,
            body_lines: Vec::new(),
            body_start_line: 0,
            skipping: false,
        }
    }

    fn run(mut self) -> DotHttpFile {
        while let Some(line) = self.ctx.current_line() {
            match self.state {
                ParserState::Start => self.on_start(line),
                ParserState::InHeaders => self.on_header(line),
                ParserState::InBody => self.on_body(line),
            }
            self.ctx.advance();
        }
        self.finish()
    }

    fn on_start(&mut self, line: &'a str) {
        if self.skipping {
            match classify(line) {
                LineKind::Separator { .. } => {}
                LineKind::Other(text) if is_explicit_request_line(text) => {}
                _ => return,
            }
            self.skipping = false;
        }
        match classify(line) {
            LineKind::Blank => {}
            LineKind::Separator { title } => self.begin_block(title),
            LineKind::Comment { text } => self.pending.comments.push(text.to_string()),
            LineKind::Directive { key, value } => {
                apply_directive(&mut self.pending.name, &mut self.pending.variables, key, value)
            }
            LineKind::Variable { name, value } => {
                self.ctx.file_mut().variables.insert(name, value);
                if self.pending.in_block {
                    self.pending.variables.insert(name, value);
                }
            }
            LineKind::Other(text) => self.start_request(line, text),
        }
    }

    fn on_header(&mut self, line: &'a str) {
        match classify(line) {
            LineKind::Blank => {
                if self.body_follows() {
                    self.state = ParserState::InBody;
                } else {
                    self.finalize();
                }
            }
            LineKind::Separator { title } => {
                self.finalize();
                self.begin_block(title);
            }
            LineKind::Comment { text } => {
                if let Some(request) = self.current.as_mut() {
                    request.comments.push(text.to_string());
                }
            }
            LineKind::Directive { key, value } => {
                if let Some(request) = self.current.as_mut() {
                    apply_directive(&mut request.name, &mut request.variables, key, value);
                }
            }
            LineKind::Variable { .. } | LineKind::Other(_) => self.read_header(line),
        }
    }

    fn on_body(&mut self, line: &'a str) {
        if let LineKind::Separator { title } = classify(line) {
            self.finalize();
            self.begin_block(title);
            return;
        }
        let Some(request) = self.current.as_mut() else {
            return;
        };
        if request.body_file_path.is_some() {
            return;
        }
        if self.body_lines.is_empty() {
            match classify(line) {
                LineKind::Blank => return,
                LineKind::Comment { text } => {
                    request.comments.push(text.to_string());
                    return;
                }
                LineKind::Directive { key, value } => {
                    apply_directive(&mut request.name, &mut request.variables, key, value);
                    return;
                }
                _ => {}
            }
            self.body_start_line = self.ctx.line_number();
            if let Some(path) = parse_body_file_reference(line) {
                request.body_file_path = Some(path.to_string());
                return;
            }
        }
        self.body_lines.push(line);
    }

    fn begin_block(&mut self, title: Option<&str>) {
        let comments = std::mem::take(&mut self.pending.comments);
        self.pending = PendingRequest {
            title: title.map(str::to_string),
            comments,
            in_block: true,
            ..PendingRequest::default()
        };
    }

    fn start_request(&mut self, line: &str, text: &str) {
        if text.starts_with(VARIABLE_PREFIX) {
            self.report(&REQUEST_LINE_ERROR, line, &[text, "invalid variable declaration"]);
            self.skipping = true;
            return;
        }
        match parse_request_line(text) {
            Ok(request_line) => {
                let pending = std::mem::take(&mut self.pending);
                self.current = Some(DotHttpRequest {
                    name: pending.name.or(pending.title),
                    method: Some(request_line.method.as_str().to_string()),
                    url: Some(request_line.url),
                    http_version: request_line.http_version,
                    line_number: self.ctx.line_number(),
                    comments: pending.comments,
                    variables: pending.variables,
                    ..DotHttpRequest::default()
                });
                self.headers_seen = false;
                self.state = ParserState::InHeaders;
            }
            Err(reason) => {
                self.report(&REQUEST_LINE_ERROR, line, &[text, reason.as_str()]);
                self.pending = PendingRequest::default();
                self.skipping = true;
            }
        }
    }

    fn read_header(&mut self, line: &str) {
        let trimmed = line.trim();
        let is_continuation = !self.headers_seen
            && line.starts_with(char::is_whitespace)
            && trimmed.starts_with(QUERY_CONTINUATION);
        if is_continuation {
            if let Some(url) = self.current.as_mut().and_then(|r| r.url.as_mut()) {
                url.push_str(trimmed);
            }
            return;
        }
        match parse_header(line) {
            Some((name, value)) => {
                if let Some(request) = self.current.as_mut() {
                    request.headers.insert(name, value);
                }
                self.headers_seen = true;
            }
            None => self.report(&INVALID_HEADER, line, &[trimmed]),
        }
    }

    /// Looks past a blank line after the headers: is there body text before
    /// the next boundary? Comments in between do not count as body.
    fn body_follows(&self) -> bool {
        let lines = self.ctx.lines();
        let rest = lines.get(self.ctx.line_index + 1..).unwrap_or_default();
        for line in rest {
            match classify(line) {
                LineKind::Blank | LineKind::Comment { .. } | LineKind::Directive { .. } => continue,
                LineKind::Other(text) => return !is_explicit_request_line(text),
                _ => return false,
            }
        }
        false
    }

    fn finalize(&mut self) {
        self.state = ParserState::Start;
        self.headers_seen = false;
        self.pending = PendingRequest::default();
        let body_lines = std::mem::take(&mut self.body_lines);
        let body_start_line = std::mem::take(&mut self.body_start_line);

        let Some(mut request) = self.current.take() else {
            return;
        };

        let mut body_lines = body_lines;
        while body_lines.last().is_some_and(|l| l.trim().is_empty()) {
            body_lines.pop();
        }
        if !body_lines.is_empty() {
            request.body = Some(body_lines.join("\n"));
        }

        analyze_request(&mut request);

        if self.options.check_body_content_type
            && request.has_body()
            && !request.headers.contains_key(CONTENT_TYPE_HEADER)
        {
            let text = body_start_line
                .checked_sub(1)
                .and_then(|i| self.ctx.lines().get(i))
                .copied()
                .unwrap_or_default();
            let location = SourceLocation::of_line(
                self.ctx.file().file_path.as_deref(),
                body_start_line,
                text,
            );
            let name = request.display_name();
            self.push_diagnostic(&MISSING_CONTENT_TYPE, location, &[name.as_str()]);
        }

        debug_log!(
            "Parsed request '{}' at line {} ({} header(s), depends on {:?})",
            request.display_name(),
            request.line_number,
            request.headers.len(),
            request.depends_on
        );
        self.ctx.file_mut().requests.push(request);
    }

    fn finish(mut self) -> DotHttpFile {
        if self.current.is_some() {
            self.finalize();
        }
        let trailing = std::mem::take(&mut self.pending.comments);
        if let Some(last) = self.ctx.file_mut().requests.last_mut() {
            last.comments.extend(trailing);
        }
        self.ctx.into_file()
    }

    fn report(&mut self, descriptor: &'static DiagnosticDescriptor, line: &str, args: &[&str]) {
        let location = SourceLocation::of_line(
            self.ctx.file().file_path.as_deref(),
            self.ctx.line_number(),
            line,
        );
        self.push_diagnostic(descriptor, location, args);
    }

    fn push_diagnostic(
        &mut self,
        descriptor: &'static DiagnosticDescriptor,
        location: SourceLocation,
        args: &[&str],
    ) {
        let diagnostic = descriptor.create(Some(location), args);
        debug_log!("{diagnostic}");
        self.ctx.file_mut().diagnostics.push(diagnostic);
    }
}

fn apply_directive(
    name: &mut Option<String>,
    variables: &mut CaseInsensitiveMap,
    key: &str,
    value: &str,
) {
    if key == DIRECTIVE_NAME {
        if let Some(first) = value.split_whitespace().next() {
            *name = Some(first.to_string());
        }
    } else {
        variables.insert(key, value);
    }
}
