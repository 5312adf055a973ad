//! Static constants.

use crate::defs::Sign;
use crate::defs::Word;
use crate::ext::Decimal;
use crate::num::Num;
use lazy_static::lazy_static;

fn small(w: Word) -> Decimal {
    Decimal::from_num(Num::from_word(Sign::Pos, w))
}

lazy_static! {
    pub(crate) static ref ONE: Decimal = small(1);
    pub(crate) static ref TWO: Decimal = small(2);
    pub(crate) static ref FIVE: Decimal = small(5);
    pub(crate) static ref EIGHT: Decimal = small(8);
    pub(crate) static ref SIXTEEN: Decimal = small(16);
    pub(crate) static ref TWENTY: Decimal = small(20);
    pub(crate) static ref HALF: Decimal = Decimal::from_scaled(5, -1);
    pub(crate) static ref QUARTER: Decimal = Decimal::from_scaled(25, -2);
    pub(crate) static ref ONE_32ND: Decimal = Decimal::from_scaled(3125, -5);
}
