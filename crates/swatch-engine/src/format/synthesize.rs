//! Styles for literals that were never captured: conversions and insertions.

use swatch_common::{Channel, ChannelDomain};
use swatch_config::{FormatConfig, HexAlphaOrder};

use super::kind::{Family, FormatKind};
use super::style::{FieldStyle, HexCase, HexOrder, HexStyle, ListStyle, NumberStyle, Style};

impl Style {
    /// Build a style for a brand-new literal of `kind`.
    ///
    /// The result rescans as the same kind: integer calls use CSS
    /// `rgb(`/`rgba(`, float calls use `Color(` and always write a point,
    /// 8-digit hex follows `hash_alpha_order`.
    pub fn synthesize(kind: FormatKind, cfg: &FormatConfig, hash_order: HexAlphaOrder) -> Style {
        match kind.family() {
            Family::Hex => Style::Hex(HexStyle {
                prefix: "#".to_string(),
                case: if cfg.prefer_uppercase_hex {
                    HexCase::Upper
                } else {
                    HexCase::Lower
                },
                suffix: String::new(),
                order: match (kind.has_alpha(), hash_order) {
                    (false, _) => HexOrder::Rgb,
                    (true, HexAlphaOrder::Rgba) => HexOrder::Rgba,
                    (true, HexAlphaOrder::Argb) => HexOrder::Argb,
                },
            }),
            Family::Call => {
                let open = match (kind.is_float(), kind.has_alpha()) {
                    (false, false) => "rgb(",
                    (false, true) => "rgba(",
                    (true, _) => "Color(",
                };
                Style::List(list_style(kind, open, ")", "", cfg))
            }
            Family::Field => Style::List(list_style(kind, "{", "}", " ", cfg)),
        }
    }
}

fn list_style(
    kind: FormatKind,
    open: &str,
    close: &str,
    pad: &str,
    cfg: &FormatConfig,
) -> ListStyle {
    let channels: &[Channel] = if kind.has_alpha() {
        &Channel::RGBA
    } else {
        &Channel::RGB
    };
    let last = channels.len() - 1;

    let real = NumberStyle::Real {
        int_width: 1,
        decimals: cfg.float_precision(),
        dot: true,
        suffix: String::new(),
        written: String::new(),
    };
    let fields = channels
        .iter()
        .enumerate()
        .map(|(i, &channel)| {
            // Integer literals carry alpha as a byte, except CSS `rgba(`.
            let unit = kind.is_float() || (channel == Channel::Alpha && open == "rgba(");
            let (domain, number) = if unit {
                (ChannelDomain::Unit, real.clone())
            } else {
                (
                    ChannelDomain::Byte,
                    NumberStyle::Int {
                        pad: 0,
                        suffix: String::new(),
                    },
                )
            };
            FieldStyle {
                leading: if i == 0 { pad } else { " " }.to_string(),
                label: None,
                channel,
                domain,
                number,
                trailing: if i == last { pad } else { "" }.to_string(),
            }
        })
        .collect();

    ListStyle {
        open: open.to_string(),
        fields,
        close: close.to_string(),
    }
}
