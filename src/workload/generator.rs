use super::catalog::{
    ArgKind, CATALOG, COUNTRIES, FALLBACK, FunctionSignature, ZONE_MAX, ZONE_MIN,
};
use super::random::RandomSource;
use super::request::{ArgValue, RequestLine};

/// Draws one request line from `source`.
///
/// The function is picked uniformly from the catalog, every argument slot is
/// filled according to its kind, and zoned signatures get a zone tag in
/// `ZONE_MIN..=ZONE_MAX`. Values a scripted source returns out of range are
/// clamped so the result always conforms to the grammar.
pub fn generate_line<R>(source: &mut R) -> RequestLine
where
    R: RandomSource + ?Sized,
{
    let index = source.pick_index(CATALOG.len());
    let signature = CATALOG.get(index).copied().unwrap_or(FALLBACK);
    fill_signature(signature, source)
}

fn fill_signature<R>(signature: FunctionSignature, source: &mut R) -> RequestLine
where
    R: RandomSource + ?Sized,
{
    let args = signature
        .args
        .iter()
        .map(|kind| draw_arg(*kind, source))
        .collect();
    let zone = signature.zoned.then(|| {
        let zone = source.int_in(u32::from(ZONE_MIN), u32::from(ZONE_MAX));
        u8::try_from(zone)
            .unwrap_or(ZONE_MAX)
            .clamp(ZONE_MIN, ZONE_MAX)
    });
    RequestLine::new(signature, args, zone)
}

fn draw_arg<R>(kind: ArgKind, source: &mut R) -> ArgValue
where
    R: RandomSource + ?Sized,
{
    match kind.int_range() {
        None => {
            let index = source.pick_index(COUNTRIES.len());
            let fallback = COUNTRIES.first().copied().unwrap_or_default();
            ArgValue::Country(COUNTRIES.get(index).copied().unwrap_or(fallback))
        }
        Some((min, max)) => ArgValue::Int(source.int_in(min, max).clamp(min, max)),
    }
}

/// Stateful generator owning its random source.
pub struct RequestGenerator<R> {
    source: R,
}

impl<R: RandomSource> RequestGenerator<R> {
    #[must_use]
    pub const fn new(source: R) -> Self {
        Self { source }
    }

    pub fn generate_line(&mut self) -> RequestLine {
        generate_line(&mut self.source)
    }

    #[must_use]
    pub fn into_source(self) -> R {
        self.source
    }
}

impl<R: RandomSource> Iterator for RequestGenerator<R> {
    type Item = RequestLine;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_line())
    }
}
