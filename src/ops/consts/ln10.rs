//! Digits of the natural logarithm of 10.

/// Decimal digits of ln(10), the first of which is the units digit.
pub(super) const LN10_DIGITS: &str = concat!(
    "23025850929940456840179914546843642076011014886287729760333279009675726096773524",
    "80235997205089598298341967784042286248633409525465082806756666287369098781689482",
    "90720832555468084379989482623319852839350530896537773262884616336622228769821988",
    "67465436674744042432743651550489343149393914796194044002221051017141748003688084",
    "01264708068556774321622835522011480466371565912137345074785694768346361679210180",
    "64450706480002775026849167465505868569356734206705811364292245544057589257242082",
    "41314695689016758940256776311356919292033376587141660230105703089634572075440370",
    "84746994016826928280848118428931484852494864487192780967627127577539702766860595",
    "24967166741834857044225071979650047149510504922147765676369386629769795221107182",
    "64549734772662425709429322582798502585509785265383207606726317164309505995087807",
    "52371033310119785754733154142180842754386359177811705430982748238504564801909561",
    "02992918243182375253577097505395651876975103749708886921802051893395072385392051",
    "44634197265287286965110862571492198849978748873771345686209167058",
);
