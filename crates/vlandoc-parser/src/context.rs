//! The parsing context machine.
//!
//! Lines are consumed in order. The machine is always in one of three
//! contexts, and the context decides which line rules apply: at top level
//! only the global directives are recognized, inside an `interface` block a
//! `name` line describes that interface, and inside a `vlan` block `name`,
//! `tagged` and `untagged` lines describe that VLAN. Lines that match no rule
//! are skipped.

use log::{debug, trace, warn};

use vlandoc_core::{
    identifier::InterfaceId,
    range::{RangeError, RangePolicy, expand_token, spec_tokens},
    switch::SwitchConfig,
    trunk::Trunk,
    vlan::{Tagging, VlanId},
};

use crate::{
    config::ParseConfig,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Severity},
    grammar::{self, Directive},
    span::{Span, Spanned},
};

/// The block the parser is currently inside.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Context {
    TopLevel,
    Interface(InterfaceId),
    Vlan(VlanId),
}

pub(crate) struct ContextMachine {
    config: ParseConfig,
    switch: SwitchConfig,
    context: Context,
    diagnostics: DiagnosticCollector,
}

impl ContextMachine {
    pub(crate) fn new(config: ParseConfig) -> Self {
        Self {
            config,
            switch: SwitchConfig::new(),
            context: Context::TopLevel,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Feeds every line of `source` through the machine.
    ///
    /// # Errors
    ///
    /// Returns all collected diagnostics when at least one of them is an error.
    pub(crate) fn run(mut self, source: &str) -> Result<SwitchConfig, ParseError> {
        for (offset, line) in lines(source) {
            self.feed(offset, line);
        }
        self.diagnostics.finish()?;
        Ok(self.switch)
    }

    /// Processes one right-trimmed line starting at byte `offset` of the source.
    fn feed(&mut self, offset: usize, line: &str) {
        let directive = match self.context {
            Context::TopLevel => grammar::top_level(line),
            Context::Interface(_) => grammar::interface_block(line),
            Context::Vlan(_) => grammar::vlan_block(line),
        };
        let Some(directive) = directive else {
            trace!(line = line; "Skipping unrecognized line");
            return;
        };

        match directive {
            Directive::Interface(name) => {
                let id = InterfaceId::new(name);
                self.switch.interface_or_insert(id.clone());
                self.context = Context::Interface(id);
            }
            Directive::Vlan(digits) => match digits.inner().parse::<u32>() {
                Ok(number) => {
                    let id = VlanId::new(number);
                    self.switch.vlan_or_insert(id);
                    self.context = Context::Vlan(id);
                }
                Err(_) => {
                    let span = digits.span().shift(offset);
                    self.diagnostics.emit(
                        Diagnostic::error(format!(
                            "VLAN number `{}` is out of range",
                            digits.inner()
                        ))
                        .with_code(ErrorCode::E200)
                        .with_label(span, ErrorCode::E200.description())
                        .with_help(format!("VLAN numbers must be at most {}", u32::MAX)),
                    );
                    self.context = Context::TopLevel;
                }
            },
            Directive::Hostname(hostname) => {
                if self.config.hostname() {
                    self.switch.set_hostname(hostname);
                } else {
                    debug!(hostname = hostname; "Ignoring hostname directive");
                }
            }
            Directive::Trunk {
                members,
                name,
                kind,
            } => {
                let mut trunk = Trunk::new(InterfaceId::new(name), kind.map(str::to_string));
                let ids = self.expand_members(offset, members);
                trunk.members_mut().extend(ids);
                self.switch.add_trunk(trunk);
            }
            Directive::Exit => self.context = Context::TopLevel,
            Directive::Name(name) => match &self.context {
                Context::Interface(id) => {
                    self.switch.interface_or_insert(id.clone()).set_name(name);
                }
                Context::Vlan(id) => self.switch.vlan_or_insert(*id).set_name(name),
                Context::TopLevel => {}
            },
            Directive::Untagged(members) => self.add_vlan_members(offset, members, Tagging::Untagged),
            Directive::Tagged(members) => self.add_vlan_members(offset, members, Tagging::Tagged),
        }
    }

    fn add_vlan_members(&mut self, offset: usize, members: Spanned<&str>, tagging: Tagging) {
        let Context::Vlan(vlan) = self.context else {
            return;
        };
        let ids = self.expand_members(offset, members);
        self.switch.add_vlan_members(vlan, tagging, ids);
    }

    /// Expands a member spec token by token, reporting each token that
    /// fails to expand and keeping the rest.
    fn expand_members(&mut self, offset: usize, members: Spanned<&str>) -> Vec<InterfaceId> {
        let list = members.span().shift(offset);
        let mut ids = Vec::new();
        for (token_offset, token) in spec_tokens(members.inner()) {
            match expand_token(token) {
                Ok(expanded) => ids.extend(expanded),
                Err(err) => {
                    let start = list.start() + token_offset;
                    self.report_range_error(err, Span::new(start..start + token.len()), list);
                }
            }
        }
        ids
    }

    fn report_range_error(&mut self, err: RangeError, span: Span, list: Span) {
        let (code, help) = match &err {
            RangeError::PrefixMismatch { .. } => (
                ErrorCode::E100,
                "both ends of a range must use the same module letter",
            ),
            RangeError::InvalidBound { .. } => (
                ErrorCode::E101,
                "write ranges as `<module><start>-<module><end>`, e.g. `A1-A8`",
            ),
            RangeError::TooLarge { .. } => (
                ErrorCode::E102,
                "split the range or check the port numbers for typos",
            ),
        };
        let severity = match self.config.range_policy() {
            RangePolicy::Strict => Severity::Error,
            RangePolicy::Lenient => {
                warn!(error = err.to_string(), start = span.start(); "Skipping malformed member token");
                Severity::Warning
            }
        };

        self.diagnostics.emit(
            Diagnostic::new(severity, err.to_string())
                .with_code(code)
                .with_label(span, code.description())
                .with_secondary_label(list, "in this member list")
                .with_help(help),
        );
    }
}

/// Splits `source` into lines with their starting byte offsets.
///
/// Line terminators (`\n` or `\r\n`) and trailing whitespace are removed.
fn lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.split_inclusive('\n').scan(0, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        Some((start, raw.trim_end()))
    })
}
