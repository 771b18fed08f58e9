//! Class name arguments.

/// One or more class names, as accepted by
/// [`Tag::add_class`](crate::Tag::add_class) and
/// [`Tag::remove_class`](crate::Tag::remove_class).
///
/// Built from a single name, an array, a slice or a vector of names, or a
/// sequence of such sequences (flattened). Strings are split on whitespace,
/// so `"btn btn-primary"` yields two names. Empty names are dropped.
///
/// # Examples
///
/// ```
/// use tagsmith_core::ClassNames;
///
/// let names = ClassNames::from(vec![vec!["a", "b"], vec!["c d"]]);
/// assert_eq!(names.as_slice(), ["a", "b", "c", "d"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames(Vec<String>);

impl ClassNames {
	fn from_text(text: &str) -> Self {
		Self(text.split_whitespace().map(str::to_string).collect())
	}

	fn flatten<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<ClassNames>,
	{
		Self(items.into_iter().flat_map(|item| item.into().0).collect())
	}

	/// The names, in the order given.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// Returns `true` if no names were given.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl IntoIterator for ClassNames {
	type Item = String;
	type IntoIter = std::vec::IntoIter<String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl From<&str> for ClassNames {
	fn from(name: &str) -> Self {
		Self::from_text(name)
	}
}

impl From<String> for ClassNames {
	fn from(name: String) -> Self {
		Self::from_text(&name)
	}
}

impl From<&String> for ClassNames {
	fn from(name: &String) -> Self {
		Self::from_text(name)
	}
}

impl<T: Into<ClassNames>> From<Vec<T>> for ClassNames {
	fn from(names: Vec<T>) -> Self {
		Self::flatten(names)
	}
}

impl<T: Into<ClassNames>, const N: usize> From<[T; N]> for ClassNames {
	fn from(names: [T; N]) -> Self {
		Self::flatten(names)
	}
}

impl<T: Into<ClassNames> + Clone> From<&[T]> for ClassNames {
	fn from(names: &[T]) -> Self {
		Self::flatten(names.iter().cloned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_single_name() {
		assert_eq!(ClassNames::from("active").as_slice(), ["active"]);
	}

	#[rstest]
	fn test_whitespace_split_and_empty_dropped() {
		assert_eq!(
			ClassNames::from("  btn \t btn-primary ").as_slice(),
			["btn", "btn-primary"]
		);
		assert!(ClassNames::from("   ").is_empty());
	}

	#[rstest]
	fn test_array_slice_and_vec() {
		assert_eq!(ClassNames::from(["a", "b"]).as_slice(), ["a", "b"]);
		let names = ["x".to_string(), "y".to_string()];
		assert_eq!(ClassNames::from(&names[..]).as_slice(), ["x", "y"]);
		assert_eq!(
			ClassNames::from(vec![String::from("p")]).as_slice(),
			["p"]
		);
	}

	#[rstest]
	fn test_nested_sequences_flatten() {
		let names = ClassNames::from([vec!["a", "b"], vec!["c"]]);
		assert_eq!(names.as_slice(), ["a", "b", "c"]);
	}
}
