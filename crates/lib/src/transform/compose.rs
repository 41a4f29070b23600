//! Function composition.

/// A boxed unary step for [`pipe`].
pub type Step<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// Composes `steps` left to right into one function.
///
/// `pipe(vec![f, g])(x)` is `g(f(x))`. An empty list yields the identity.
///
/// ```
/// # use shapekit::transform::{pipe, Step};
/// let steps: Vec<Step<'_, i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 2)];
/// let inc_then_double = pipe(steps);
/// assert_eq!(inc_then_double(3), 8);
/// ```
pub fn pipe<'a, T>(steps: Vec<Step<'a, T>>) -> impl Fn(T) -> T + 'a
where
    T: 'a,
{
    move |input| steps.iter().fold(input, |acc, step| step(acc))
}
