use proptest::prelude::*;
use rstest::rstest;

use super::{FromText, ToText};

fn round_trip<T: FromText + ToText + PartialEq + std::fmt::Debug>(value: T) {
	let text = value.to_text().expect("built-in codecs always format");
	let parsed = T::from_text(&text).expect("formatted text parses back");
	assert_eq!(parsed, value, "round trip through {text:?}");
}

#[rstest]
#[case("true", true)]
#[case("TRUE", true)]
#[case("yes", true)]
#[case("on", true)]
#[case("1", true)]
#[case("false", false)]
#[case("No", false)]
#[case("off", false)]
#[case("0", false)]
fn test_bool_accepts_common_spellings(#[case] text: &str, #[case] expected: bool) {
	assert_eq!(bool::from_text(text), Ok(expected));
}

#[test]
fn test_bool_rejects_garbage() {
	let err = bool::from_text("maybe").unwrap_err();
	assert!(err.reason().contains("true/false"));
}

#[rstest]
#[case("3abc")]
#[case(" 3")]
#[case("")]
#[case("notanumber")]
fn test_integers_parse_strictly(#[case] text: &str) {
	assert!(i32::from_text(text).is_err());
}

#[test]
fn test_integer_overflow_is_a_parse_error() {
	assert!(u8::from_text("256").is_err());
	assert_eq!(u8::from_text("255"), Ok(255));
	assert_eq!(i64::from_text("-42"), Ok(-42));
}

#[test]
fn test_char_requires_single_scalar() {
	assert_eq!(char::from_text("x"), Ok('x'));
	assert_eq!(char::from_text("é"), Ok('é'));
	assert!(char::from_text("").is_err());
	assert!(char::from_text("xy").is_err());
}

#[test]
fn test_string_is_identity() {
	assert_eq!(String::from_text("go"), Ok("go".to_string()));
	assert_eq!(String::from_text(""), Ok(String::new()));
	assert_eq!("hi".to_string().to_text(), Ok("hi".to_string()));
}

proptest! {
	#[test]
	fn prop_i64_round_trips(v in any::<i64>()) {
		round_trip(v);
	}

	#[test]
	fn prop_u128_round_trips(v in any::<u128>()) {
		round_trip(v);
	}

	#[test]
	fn prop_i8_round_trips(v in any::<i8>()) {
		round_trip(v);
	}

	#[test]
	fn prop_i16_round_trips(v in any::<i16>()) {
		round_trip(v);
	}

	#[test]
	fn prop_i32_round_trips(v in any::<i32>()) {
		round_trip(v);
	}

	#[test]
	fn prop_i128_round_trips(v in any::<i128>()) {
		round_trip(v);
	}

	#[test]
	fn prop_isize_round_trips(v in any::<isize>()) {
		round_trip(v);
	}

	#[test]
	fn prop_u8_round_trips(v in any::<u8>()) {
		round_trip(v);
	}

	#[test]
	fn prop_u16_round_trips(v in any::<u16>()) {
		round_trip(v);
	}

	#[test]
	fn prop_u32_round_trips(v in any::<u32>()) {
		round_trip(v);
	}

	#[test]
	fn prop_u64_round_trips(v in any::<u64>()) {
		round_trip(v);
	}

	#[test]
	fn prop_usize_round_trips(v in any::<usize>()) {
		round_trip(v);
	}

	#[test]
	fn prop_f64_round_trips(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
		round_trip(v);
	}

	#[test]
	fn prop_f32_round_trips(v in any::<f32>().prop_filter("finite", |v| v.is_finite())) {
		round_trip(v);
	}

	#[test]
	fn prop_bool_round_trips(v in any::<bool>()) {
		round_trip(v);
	}

	#[test]
	fn prop_char_round_trips(v in any::<char>()) {
		round_trip(v);
	}

	#[test]
	fn prop_string_round_trips(v in ".*") {
		round_trip(v);
	}
}
