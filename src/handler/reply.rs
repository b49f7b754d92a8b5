/// Joins items as English prose: `a`, `a and b`, `a, b, and c`.
pub fn comma_andify<T: AsRef<str>>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|item| item.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}
