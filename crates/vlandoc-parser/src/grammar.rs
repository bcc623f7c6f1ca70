//! Line rules of the configuration dialect.
//!
//! Every rule recognizes one complete, already right-trimmed line: it is
//! anchored at both ends, so a line either conforms entirely or is not
//! matched at all. Top-level directives start in column 0, block directives
//! are indented, and `exit` may be either.
//!
//! Which rules are tried depends on the block the parser is in. Block rules
//! come first, then the top-level rules, and the first rule that matches wins.

use winnow::{
    Parser as _,
    ascii::{digit1, space0, space1},
    combinator::{alt, eof, opt, preceded, terminated},
    error::ModalResult,
    stream::LocatingSlice,
    token::{literal, rest, take_while},
};

use crate::span::{Span, Spanned};

type Input<'a> = LocatingSlice<&'a str>;

/// A recognized configuration line.
///
/// Spans are relative to the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Directive<'a> {
    /// `interface <id>`
    Interface(&'a str),
    /// `vlan <n>`, with the digits still undecoded
    Vlan(Spanned<&'a str>),
    /// `hostname "<name>"`
    Hostname(&'a str),
    /// `trunk <members> Trk<n> [<kind>]`
    Trunk {
        members: Spanned<&'a str>,
        name: &'a str,
        kind: Option<&'a str>,
    },
    /// `exit`, optionally indented
    Exit,
    /// Indented `name "<text>"`
    Name(&'a str),
    /// Indented `untagged <members>`
    Untagged(Spanned<&'a str>),
    /// Indented `tagged <members>`
    Tagged(Spanned<&'a str>),
}

/// Matches `line` against the top-level rules.
pub(crate) fn top_level(line: &str) -> Option<Directive<'_>> {
    let mut input = LocatingSlice::new(line);
    global_directive(&mut input).ok()
}

/// Matches `line` against the rules of an `interface` block.
pub(crate) fn interface_block(line: &str) -> Option<Directive<'_>> {
    let mut input = LocatingSlice::new(line);
    alt((name_line, global_directive))
        .parse_next(&mut input)
        .ok()
}

/// Matches `line` against the rules of a `vlan` block.
pub(crate) fn vlan_block(line: &str) -> Option<Directive<'_>> {
    let mut input = LocatingSlice::new(line);
    alt((name_line, untagged_line, tagged_line, global_directive))
        .parse_next(&mut input)
        .ok()
}

fn global_directive<'a>(input: &mut Input<'a>) -> ModalResult<Directive<'a>> {
    alt((
        interface_line,
        vlan_line,
        hostname_line,
        trunk_line,
        exit_line,
    ))
    .parse_next(input)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_while(1.., is_word).parse_next(input)
}

/// A comma-separated member list such as `A1-A4,B2`.
///
/// The list must start and end with a word character.
fn member_spec<'a>(input: &mut Input<'a>) -> ModalResult<Spanned<&'a str>> {
    take_while(1.., |c: char| is_word(c) || c == ',' || c == '-')
        .verify(|spec: &str| spec.starts_with(is_word) && spec.ends_with(is_word))
        .with_span()
        .map(|(spec, range)| Spanned::new(spec, Span::new(range)))
        .parse_next(input)
}

/// The rest of the line with one optional pair of surrounding quotes removed.
fn quoted_value<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    rest.map(unquote).parse_next(input)
}

fn unquote(raw: &str) -> &str {
    let value = raw.strip_prefix('"').unwrap_or(raw);
    value.strip_suffix('"').unwrap_or(value)
}

fn interface_line<'a>(input: &mut Input<'a>) -> ModalResult<Directive<'a>> {
    terminated(preceded(("interface", space1), word), eof)
        .map(Directive::Interface)
        .parse_next(input)
}

fn vlan_line<'a>(input: &mut Input<'a>) -> ModalResult<Directive<'a>> {
    terminated(preceded(("vlan", space1), digit1.with_span()), eof)
        .map(|(digits, range)| Directive::Vlan(Spanned::new(digits, Span::new(range))))
        .parse_next(input)
}

fn hostname_line<'a>(input: &mut Input<'a>) -> ModalResult<Directive<'a>> {
    preceded(("hostname", space1), quoted_value)
        .map(Directive::Hostname)
        .parse_next(input)
}

fn trunk_name<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (literal("Trk"), digit1).take().parse_next(input)
}

/// Aggregation protocol keyword after the trunk name, e.g. `LACP` or `dt-lacp`.
fn trunk_kind<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_while(1.., |c: char| is_word(c) || c == '-').parse_next(input)
}

fn trunk_line<'a>(input: &mut Input<'a>) -> ModalResult<Directive<'a>> {
    terminated(
        (
            preceded(("trunk", space1), member_spec),
            preceded(space1, trunk_name),
            opt(preceded(space1, trunk_kind)),
        ),
        eof,
    )
    .map(|(members, name, kind)| Directive::Trunk {
        members,
        name,
        kind,
    })
    .parse_next(input)
}

fn exit_line<'a>(input: &mut Input<'a>) -> ModalResult<Directive<'a>> {
    terminated((space0, "exit"), eof)
        .value(Directive::Exit)
        .parse_next(input)
}

fn name_line<'a>(input: &mut Input<'a>) -> ModalResult<Directive<'a>> {
    preceded((space1, "name", space1), quoted_value)
        .map(Directive::Name)
        .parse_next(input)
}

fn untagged_line<'a>(input: &mut Input<'a>) -> ModalResult<Directive<'a>> {
    terminated(preceded((space1, "untagged", space1), member_spec), eof)
        .map(Directive::Untagged)
        .parse_next(input)
}

fn tagged_line<'a>(input: &mut Input<'a>) -> ModalResult<Directive<'a>> {
    terminated(preceded((space1, "tagged", space1), member_spec), eof)
        .map(Directive::Tagged)
        .parse_next(input)
}
