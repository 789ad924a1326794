//! Generators for the Pedersen hash function.
//!
//! See <https://docs.starkware.co/starkex/crypto/pedersen-hash-function.html>
use crate::algebra::curve::ProjectivePoint;

/// Montgomery representation of the Stark curve constant P0.
pub const PEDERSEN_P0: ProjectivePoint = ProjectivePoint::from_montgomery(
    [
        1933903796324928314,
        7739989395386261137,
        1641324389046377921,
        316327189671755572,
    ],
    [
        14252083571674603243,
        12587053260418384210,
        4798858472748676776,
        81375596133053150,
    ],
);

/// Montgomery representation of the Stark curve constant P1.
pub const PEDERSEN_P1: ProjectivePoint = ProjectivePoint::from_montgomery(
    [
        3602345268353203007,
        13758484295849329960,
        518715844721862878,
        241691544791834578,
    ],
    [
        13441546676070136227,
        13001553326386915570,
        433857700841878496,
        368891789801938570,
    ],
);

/// Montgomery representation of the Stark curve constant P2.
pub const PEDERSEN_P2: ProjectivePoint = ProjectivePoint::from_montgomery(
    [
        16491878934996302286,
        12382025591154462459,
        10043949394709899044,
        253000153565733272,
    ],
    [
        13950428914333633429,
        2545498000137298346,
        5191292837124484988,
        285630633187035523,
    ],
);

/// Montgomery representation of the Stark curve constant P3.
pub const PEDERSEN_P3: ProjectivePoint = ProjectivePoint::from_montgomery(
    [
        1203723169299412240,
        18195981508842736832,
        12916675983929588442,
        338510149841406402,
    ],
    [
        12352616181161700245,
        11743524503750604092,
        11088962269971685343,
        161068411212710156,
    ],
);

/// Montgomery representation of the Stark curve constant P4.
pub const PEDERSEN_P4: ProjectivePoint = ProjectivePoint::from_montgomery(
    [
        1145636535101238356,
        10664803185694787051,
        299781701614706065,
        425493972656615276,
    ],
    [
        8187986478389849302,
        4428713245976508844,
        6033691581221864148,
        345457391846365716,
    ],
);
