mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_len_and_contains() {
        let s = Span::new(4, 10);
        assert_eq!(s.len(), 6);
        assert!(s.contains(4));
        assert!(s.contains(9));
        assert!(!s.contains(10));
        assert!(!Span::new(3, 3).contains(3));
    }

    #[test]
    fn span_overlap_is_half_open() {
        let a = Span::new(0, 5);
        assert!(a.overlaps(&Span::new(4, 8)));
        assert!(!a.overlaps(&Span::new(5, 8)));
        assert!(!Span::new(5, 8).overlaps(&a));
    }

    #[test]
    fn span_shift_both_directions() {
        assert_eq!(Span::new(10, 14).shift(3), Span::new(13, 17));
        assert_eq!(Span::new(10, 14).shift(-10), Span::new(0, 4));
    }

    #[test]
    fn span_serialization() {
        let s = Span::new(1, 9);
        let json = serde_json::to_string(&s).unwrap();
        let deserialized: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }

    #[test]
    fn text_version_orders_and_advances() {
        let v = TextVersion::default();
        assert_eq!(v.next(), TextVersion(1));
        assert!(v < v.next());
        assert_eq!(TextVersion(4).to_string(), "version 4");
    }

    #[test]
    fn channel_labels() {
        assert_eq!(Channel::from_label("red"), Some(Channel::Red));
        assert_eq!(Channel::from_label("R"), Some(Channel::Red));
        assert_eq!(Channel::from_label("Alpha"), Some(Channel::Alpha));
        assert_eq!(Channel::from_label("hue"), None);
    }

    #[test]
    fn int8_roundtrip_is_identity() {
        for n in 0..=255u8 {
            let c = CanonicalColor::from_int8(n, n, n, Some(n));
            assert_eq!(c.to_int8(), [n, n, n, n]);
        }
    }

    #[test]
    fn missing_alpha_is_opaque() {
        let c = CanonicalColor::from_int8(1, 2, 3, None);
        assert_eq!(c.a(), 1.0);
        let c = CanonicalColor::from_float(0.1, 0.2, 0.3, None).unwrap();
        assert_eq!(c.a(), 1.0);
        assert!(c.is_opaque());
    }

    #[test]
    fn from_float_rejects_out_of_range() {
        let err = CanonicalColor::from_float(1.5, 0.0, 0.0, None).unwrap_err();
        assert!(matches!(
            err,
            crate::ParseError::OutOfRange {
                channel: Channel::Red,
                ..
            }
        ));
        assert!(CanonicalColor::from_float(0.0, -0.1, 0.0, None).is_err());
        assert!(CanonicalColor::from_float(0.0, 0.0, f64::NAN, None).is_err());
        assert!(CanonicalColor::from_float(0.0, 0.0, 0.0, Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn to_int8_rounds_half_away_from_zero() {
        // 0.5 * 255 = 127.5
        let c = CanonicalColor::from_float(127.5 / 255.0, 0.0, 0.0, None).unwrap();
        assert_eq!(c.to_int8()[0], 128);
    }

    #[test]
    fn color_from_hex_6() {
        let c = CanonicalColor::from_hex("#ff8800").unwrap();
        assert_eq!(c.to_int8(), [255, 136, 0, 255]);
    }

    #[test]
    fn color_from_hex_8() {
        let c = CanonicalColor::from_hex("#ff880080").unwrap();
        assert_eq!(c.to_int8(), [255, 136, 0, 128]);
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(CanonicalColor::from_hex("zzzzzz").is_none());
        assert!(CanonicalColor::from_hex("#abc").is_none());
        assert!(CanonicalColor::from_hex("#+12345").is_none());
        assert!(CanonicalColor::from_hex("").is_none());
    }

    #[test]
    fn color_to_hex_opaque_and_translucent() {
        assert_eq!(
            CanonicalColor::from_int8(255, 0, 128, None).to_hex(),
            "#ff0080"
        );
        assert_eq!(
            CanonicalColor::from_int8(255, 0, 128, Some(128)).to_hex(),
            "#ff008080"
        );
    }

    #[test]
    fn approx_eq_uses_tolerance() {
        let a = CanonicalColor::from_int8(98, 0, 238, None);
        let b = CanonicalColor::from_float(0.384, 0.0, 0.933, None).unwrap();
        assert!(a.approx_eq(&b, 1e-3));
        assert!(!a.approx_eq(&CanonicalColor::default(), 1e-3));
    }
}
