//! Delimited channel lists shared by call and field-initializer notations.

use swatch_common::{CanonicalColor, Channel, ChannelDomain, ParseError};
use swatch_config::FormatConfig;

use super::lex::{self, Label, NumberToken};
use super::style::{FieldStyle, ListStyle, NumberStyle};

/// One lexed member of a channel list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawField {
    pub leading: String,
    pub label: Option<Label>,
    pub number: NumberToken,
    pub trailing: String,
}

/// Everything a list recognizer captured, ready for parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCapture {
    pub(crate) open: String,
    pub(crate) fields: Vec<RawField>,
    pub(crate) close: char,
    /// Channel order for unlabelled members.
    pub(crate) positional: &'static [Channel],
    pub(crate) float: bool,
    /// Alpha is written 0.0-1.0 even in an integer literal (CSS `rgba`).
    pub(crate) unit_alpha: bool,
}

/// Lex `field (, field)* close` starting just after the opening delimiter.
///
/// Returns the fields and the offset just past `close`. Arity outside 3..=4,
/// non-numeric members and unknown labels all reject the list.
pub(crate) fn lex_fields(text: &str, mut pos: usize, close: u8) -> Option<(Vec<RawField>, usize)> {
    let mut fields = Vec::with_capacity(4);
    loop {
        let start = pos;
        pos = lex::skip_ws(text, pos);
        let leading = text[start..pos].to_string();

        let label = match lex::label(text, pos).ok()? {
            Some((label, end)) => {
                pos = end;
                Some(label)
            }
            None => None,
        };

        let (number, end) = NumberToken::lex(text, pos)?;
        let ws_end = lex::skip_ws(text, end);
        fields.push(RawField {
            leading,
            label,
            number,
            trailing: text[end..ws_end].to_string(),
        });
        pos = ws_end;

        match lex::byte_at(text, pos)? {
            b',' if fields.len() < 4 => pos += 1,
            b if b == close && fields.len() >= 3 => return Some((fields, pos + 1)),
            _ => return None,
        }
    }
}

/// Positional channel order for an `arity`-member list.
pub(crate) fn positional_order(arity: usize, argb: bool) -> &'static [Channel] {
    match (arity, argb) {
        (4, true) => &Channel::ARGB,
        (4, false) => &Channel::RGBA,
        _ => &Channel::RGB,
    }
}

pub(crate) fn channel_of(field: &RawField, index: usize, positional: &[Channel]) -> Channel {
    field
        .label
        .as_ref()
        .map(|l| l.channel)
        .unwrap_or_else(|| positional.get(index).copied().unwrap_or(Channel::Alpha))
}

/// Whether any color (non-alpha) member is written with a decimal point.
pub(crate) fn has_real_color_channel(fields: &[RawField], positional: &[Channel]) -> bool {
    fields
        .iter()
        .enumerate()
        .any(|(i, f)| f.number.dot && channel_of(f, i, positional) != Channel::Alpha)
}

pub(crate) fn has_alpha(fields: &[RawField], positional: &[Channel]) -> bool {
    fields
        .iter()
        .enumerate()
        .any(|(i, f)| channel_of(f, i, positional) == Channel::Alpha)
}

impl ListCapture {
    pub(crate) fn parse(&self) -> Result<(CanonicalColor, ListStyle), ParseError> {
        let mut values: [Option<f64>; 4] = [None; 4];
        let mut styles = Vec::with_capacity(self.fields.len());

        for (i, field) in self.fields.iter().enumerate() {
            let channel = channel_of(field, i, self.positional);
            let domain = self.domain_of(channel, &field.number);
            let slot = &mut values[channel.index()];
            if slot.is_some() {
                return Err(ParseError::DuplicateChannel(channel));
            }
            *slot = Some(channel_value(channel, domain, &field.number)?);

            styles.push(FieldStyle {
                leading: field.leading.clone(),
                label: field.label.as_ref().map(|l| l.text.clone()),
                channel,
                domain,
                number: number_style(domain, &field.number),
                trailing: field.trailing.clone(),
            });
        }

        let mut unit = [0.0, 0.0, 0.0, 1.0];
        for channel in Channel::RGBA {
            match values[channel.index()] {
                Some(v) => unit[channel.index()] = v,
                None if channel == Channel::Alpha => {}
                None => return Err(ParseError::MissingChannel(channel)),
            }
        }

        let color = CanonicalColor::from_channels(unit)?;
        let style = ListStyle {
            open: self.open.clone(),
            fields: styles,
            close: self.close.to_string(),
        };
        Ok((color, style))
    }

    fn domain_of(&self, channel: Channel, number: &NumberToken) -> ChannelDomain {
        if self.float || (channel == Channel::Alpha && (self.unit_alpha || number.dot)) {
            ChannelDomain::Unit
        } else {
            ChannelDomain::Byte
        }
    }
}

/// Validate one token against its domain and return it as a unit value.
fn channel_value(
    channel: Channel,
    domain: ChannelDomain,
    number: &NumberToken,
) -> Result<f64, ParseError> {
    let out_of_range = || ParseError::OutOfRange {
        channel,
        value: number.text.clone(),
        domain,
    };
    if number.negative {
        return Err(out_of_range());
    }

    match domain {
        ChannelDomain::Byte => {
            let n: u64 = number
                .int_digits
                .parse()
                .map_err(|_| ParseError::MalformedNumber(number.text.clone()))?;
            let byte = u8::try_from(n).map_err(|_| out_of_range())?;
            Ok(f64::from(byte) / 255.0)
        }
        ChannelDomain::Unit => {
            let v: f64 = number
                .body()
                .parse()
                .map_err(|_| ParseError::MalformedNumber(number.text.clone()))?;
            if (0.0..=1.0).contains(&v) {
                Ok(v)
            } else {
                Err(out_of_range())
            }
        }
    }
}

fn number_style(domain: ChannelDomain, number: &NumberToken) -> NumberStyle {
    match domain {
        ChannelDomain::Byte => {
            let digits = &number.int_digits;
            let pad = if digits.len() > 1 && digits.starts_with('0') {
                digits.len()
            } else {
                0
            };
            NumberStyle::Int {
                pad,
                suffix: number.suffix.clone(),
            }
        }
        ChannelDomain::Unit => NumberStyle::Real {
            int_width: number.int_digits.len(),
            decimals: number.frac_digits.len(),
            dot: number.dot,
            suffix: number.suffix.clone(),
            written: number.body(),
        },
    }
}

/// Rebuild a list literal for `color`.
///
/// Channels missing from the style are omitted, so alpha is only written
/// when the original literal had it.
pub(crate) fn serialize(color: &CanonicalColor, style: &ListStyle, cfg: &FormatConfig) -> String {
    let fields: Vec<String> = style
        .fields
        .iter()
        .map(|f| {
            format!(
                "{}{}{}{}",
                f.leading,
                f.label.as_deref().unwrap_or(""),
                f.number.render(color.channel(f.channel), cfg),
                f.trailing
            )
        })
        .collect();
    format!("{}{}{}", style.open, fields.join(","), style.close)
}
