/// Build an ordered list of regex substitution rules.
///
/// Rules run in the order written, so a rule may rely on every rule above it
/// having already been applied.
///
/// example:
/// ```ignore
/// let rules = substitution_rules! {
///     numbers: r"\d" => "0",
///     spaces: r" +" => " ",
/// };
/// ```
#[macro_export]
macro_rules! substitution_rules {
    ($($name:ident: $pattern:expr => $replacement:expr),* $(,)?) => {
        vec![
            $($crate::domain::text::Rule::new(
                stringify!($name),
                $pattern,
                $crate::domain::text::Replacement::from($replacement),
            ),)*
        ]
    };
}
