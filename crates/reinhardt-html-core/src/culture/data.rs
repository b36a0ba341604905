//! Built-in culture tables

use super::{Culture, DateTimeFormat, NumberFormat};
use std::borrow::Cow;

fn names<const N: usize>(values: [&'static str; N]) -> [Cow<'static, str>; N] {
	values.map(Cow::Borrowed)
}

const ENGLISH_DAYS: [&str; 7] = [
	"Sunday",
	"Monday",
	"Tuesday",
	"Wednesday",
	"Thursday",
	"Friday",
	"Saturday",
];

const ENGLISH_DAYS_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const ENGLISH_MONTHS: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

const ENGLISH_MONTHS_ABBR: [&str; 12] = [
	"Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn english_date_time() -> DateTimeFormat {
	DateTimeFormat {
		day_names: names(ENGLISH_DAYS),
		abbreviated_day_names: names(ENGLISH_DAYS_ABBR),
		month_names: names(ENGLISH_MONTHS),
		abbreviated_month_names: names(ENGLISH_MONTHS_ABBR),
		am_designator: "AM".into(),
		pm_designator: "PM".into(),
		era_name: "A.D.".into(),
		date_separator: "/".into(),
		time_separator: ":".into(),
		short_date_pattern: "MM/dd/yyyy".into(),
		long_date_pattern: "dddd, dd MMMM yyyy".into(),
		short_time_pattern: "HH:mm".into(),
		long_time_pattern: "HH:mm:ss".into(),
		month_day_pattern: "MMMM dd".into(),
		year_month_pattern: "yyyy MMMM".into(),
	}
}

fn base_number() -> NumberFormat {
	NumberFormat {
		negative_sign: "-".into(),
		decimal_separator: ".".into(),
		group_separator: ",".into(),
		group_sizes: vec![3],
		decimal_digits: 2,
		currency_symbol: "\u{00A4}".into(),
		currency_decimal_digits: 2,
		currency_positive_pattern: "$n".into(),
		currency_negative_pattern: "($n)".into(),
		percent_symbol: "%".into(),
		per_mille_symbol: "\u{2030}".into(),
		percent_decimal_digits: 2,
		percent_positive_pattern: "n %".into(),
		percent_negative_pattern: "-n %".into(),
		nan_symbol: "NaN".into(),
		positive_infinity_symbol: "Infinity".into(),
		negative_infinity_symbol: "-Infinity".into(),
	}
}

pub(super) fn invariant() -> Culture {
	Culture::new("", base_number(), english_date_time())
}

pub(super) fn en_us() -> Culture {
	let number = NumberFormat {
		currency_symbol: "$".into(),
		currency_negative_pattern: "-$n".into(),
		percent_positive_pattern: "n%".into(),
		percent_negative_pattern: "-n%".into(),
		positive_infinity_symbol: "\u{221E}".into(),
		negative_infinity_symbol: "-\u{221E}".into(),
		..base_number()
	};
	let date_time = DateTimeFormat {
		short_date_pattern: "M/d/yyyy".into(),
		long_date_pattern: "dddd, MMMM d, yyyy".into(),
		short_time_pattern: "h:mm tt".into(),
		long_time_pattern: "h:mm:ss tt".into(),
		month_day_pattern: "MMMM d".into(),
		year_month_pattern: "MMMM yyyy".into(),
		..english_date_time()
	};
	Culture::new("en-US", number, date_time)
}

pub(super) fn en_gb() -> Culture {
	let number = NumberFormat {
		currency_symbol: "\u{00A3}".into(),
		currency_negative_pattern: "-$n".into(),
		percent_positive_pattern: "n%".into(),
		percent_negative_pattern: "-n%".into(),
		positive_infinity_symbol: "\u{221E}".into(),
		negative_infinity_symbol: "-\u{221E}".into(),
		..base_number()
	};
	let date_time = DateTimeFormat {
		short_date_pattern: "dd/MM/yyyy".into(),
		long_date_pattern: "dddd, d MMMM yyyy".into(),
		am_designator: "am".into(),
		pm_designator: "pm".into(),
		month_day_pattern: "d MMMM".into(),
		year_month_pattern: "MMMM yyyy".into(),
		..english_date_time()
	};
	Culture::new("en-GB", number, date_time)
}

pub(super) fn fr_fr() -> Culture {
	let number = NumberFormat {
		decimal_separator: ",".into(),
		group_separator: "\u{202F}".into(),
		currency_symbol: "\u{20AC}".into(),
		currency_positive_pattern: "n\u{00A0}$".into(),
		currency_negative_pattern: "-n\u{00A0}$".into(),
		percent_positive_pattern: "n\u{00A0}%".into(),
		percent_negative_pattern: "-n\u{00A0}%".into(),
		positive_infinity_symbol: "\u{221E}".into(),
		negative_infinity_symbol: "-\u{221E}".into(),
		..base_number()
	};
	let date_time = DateTimeFormat {
		day_names: names([
			"dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
		]),
		abbreviated_day_names: names(["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."]),
		month_names: names([
			"janvier",
			"f\u{e9}vrier",
			"mars",
			"avril",
			"mai",
			"juin",
			"juillet",
			"ao\u{fb}t",
			"septembre",
			"octobre",
			"novembre",
			"d\u{e9}cembre",
		]),
		abbreviated_month_names: names([
			"janv.",
			"f\u{e9}vr.",
			"mars",
			"avr.",
			"mai",
			"juin",
			"juil.",
			"ao\u{fb}t",
			"sept.",
			"oct.",
			"nov.",
			"d\u{e9}c.",
		]),
		era_name: "ap. J.-C.".into(),
		short_date_pattern: "dd/MM/yyyy".into(),
		long_date_pattern: "dddd d MMMM yyyy".into(),
		month_day_pattern: "d MMMM".into(),
		year_month_pattern: "MMMM yyyy".into(),
		..english_date_time()
	};
	Culture::new("fr-FR", number, date_time)
}

pub(super) fn de_de() -> Culture {
	let number = NumberFormat {
		decimal_separator: ",".into(),
		group_separator: ".".into(),
		currency_symbol: "\u{20AC}".into(),
		currency_positive_pattern: "n\u{00A0}$".into(),
		currency_negative_pattern: "-n\u{00A0}$".into(),
		percent_positive_pattern: "n\u{00A0}%".into(),
		percent_negative_pattern: "-n\u{00A0}%".into(),
		positive_infinity_symbol: "\u{221E}".into(),
		negative_infinity_symbol: "-\u{221E}".into(),
		..base_number()
	};
	let date_time = DateTimeFormat {
		day_names: names([
			"Sonntag",
			"Montag",
			"Dienstag",
			"Mittwoch",
			"Donnerstag",
			"Freitag",
			"Samstag",
		]),
		abbreviated_day_names: names(["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."]),
		month_names: names([
			"Januar",
			"Februar",
			"M\u{e4}rz",
			"April",
			"Mai",
			"Juni",
			"Juli",
			"August",
			"September",
			"Oktober",
			"November",
			"Dezember",
		]),
		abbreviated_month_names: names([
			"Jan.",
			"Feb.",
			"M\u{e4}rz",
			"Apr.",
			"Mai",
			"Juni",
			"Juli",
			"Aug.",
			"Sept.",
			"Okt.",
			"Nov.",
			"Dez.",
		]),
		era_name: "n. Chr.".into(),
		date_separator: ".".into(),
		short_date_pattern: "dd.MM.yyyy".into(),
		long_date_pattern: "dddd, d. MMMM yyyy".into(),
		month_day_pattern: "d. MMMM".into(),
		year_month_pattern: "MMMM yyyy".into(),
		..english_date_time()
	};
	Culture::new("de-DE", number, date_time)
}

pub(super) fn ja_jp() -> Culture {
	let number = NumberFormat {
		currency_symbol: "\u{FFE5}".into(),
		currency_decimal_digits: 0,
		currency_negative_pattern: "-$n".into(),
		percent_positive_pattern: "n%".into(),
		percent_negative_pattern: "-n%".into(),
		positive_infinity_symbol: "\u{221E}".into(),
		negative_infinity_symbol: "-\u{221E}".into(),
		..base_number()
	};
	let months = names([
		"1\u{6708}",
		"2\u{6708}",
		"3\u{6708}",
		"4\u{6708}",
		"5\u{6708}",
		"6\u{6708}",
		"7\u{6708}",
		"8\u{6708}",
		"9\u{6708}",
		"10\u{6708}",
		"11\u{6708}",
		"12\u{6708}",
	]);
	let date_time = DateTimeFormat {
		day_names: names([
			"\u{65E5}\u{66DC}\u{65E5}",
			"\u{6708}\u{66DC}\u{65E5}",
			"\u{706B}\u{66DC}\u{65E5}",
			"\u{6C34}\u{66DC}\u{65E5}",
			"\u{6728}\u{66DC}\u{65E5}",
			"\u{91D1}\u{66DC}\u{65E5}",
			"\u{571F}\u{66DC}\u{65E5}",
		]),
		abbreviated_day_names: names([
			"\u{65E5}", "\u{6708}", "\u{706B}", "\u{6C34}", "\u{6728}", "\u{91D1}", "\u{571F}",
		]),
		month_names: months.clone(),
		abbreviated_month_names: months,
		am_designator: "\u{5348}\u{524D}".into(),
		pm_designator: "\u{5348}\u{5F8C}".into(),
		era_name: "\u{897F}\u{66A6}".into(),
		short_date_pattern: "yyyy/MM/dd".into(),
		long_date_pattern: "yyyy\u{5E74}M\u{6708}d\u{65E5}dddd".into(),
		short_time_pattern: "H:mm".into(),
		long_time_pattern: "H:mm:ss".into(),
		month_day_pattern: "M\u{6708}d\u{65E5}".into(),
		year_month_pattern: "yyyy\u{5E74}M\u{6708}".into(),
		..english_date_time()
	};
	Culture::new("ja-JP", number, date_time)
}
