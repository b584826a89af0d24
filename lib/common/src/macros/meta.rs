/// Duplicate an [item](https://doc.rust-lang.org/nightly/reference/items.html) `$imp` for each type
/// `$Ty`, making it available within `$imp` under the alias `$Alias`.
///
/// Each type may be followed by a block of constants, typed as `$Alias`, which differ between
/// the copies.
///
/// Please use traits instead of this, where reasonable.
///
/// ```
/// trait Halve {
///     const SMALL: Self;
///     fn halve(self) -> Self;
/// }
///
/// tessera_common::item_with! {
///     Real: f32 { SMALL = 1e-5 }, f64 { SMALL = 1e-9 } => impl Halve for Real {
///         const SMALL: Self = SMALL;
///         fn halve(self) -> Self {
///             self / 2.0
///         }
///     }
/// }
///
/// assert_eq!(3.0f32.halve(), 1.5);
/// assert_eq!(3.0f64.halve(), 1.5);
/// assert_eq!(<f64 as Halve>::SMALL, 1e-9);
/// ```
#[macro_export]
macro_rules! item_with {
    {$Alias:ident: $($Ty:ty $({ $($Const:ident = $value:expr),* $(,)? })?),+ => $imp:item} => {
        $(
            const _: () = { // anonymous module
                type $Alias = $Ty;
                $($(const $Const: $Alias = $value;)*)?
                $imp
            };
        )+
    };
}
