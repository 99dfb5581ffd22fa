//! Direction numbers of the Sobol sequence.
//!
//! Primitive polynomials over GF(2) of degree 1 to 13, ordered by degree then by
//! coefficients (Joe and Kuo ordering), with their initial direction numbers.
//! Dimensions 1 to 50 of the table follow the `new-joe-kuo-6` initial numbers,
//! later ones were selected with the same criterion: lowest t-values of the
//! two-dimensional projections with previous dimensions.

/// Each entry is `(s, a, m)`: `s` is the degree, the bits of `a` are the inner
/// coefficients of `x^s + a_1 x^(s-1) + ... + a_(s-1) x + 1` (most significant first)
/// and `m` are the `s` initial odd direction numbers `m_k < 2^k`.
/// Entry `i` drives dimension `i + 1`, dimension 0 being the van der Corput sequence.
#[rustfmt::skip]
pub(super) const PRIMITIVE_POLYNOMIALS: &[(usize, u32, &[u32])] = &[
    (1, 0, &[1]),
    (2, 1, &[1, 3]),
    (3, 1, &[1, 3, 1]),
    (3, 2, &[1, 1, 1]),
    (4, 1, &[1, 1, 3, 3]),
    (4, 4, &[1, 3, 5, 13]),
    (5, 2, &[1, 1, 5, 5, 17]),
    (5, 4, &[1, 1, 5, 5, 5]),
    (5, 7, &[1, 1, 7, 11, 19]),
    (5, 11, &[1, 1, 5, 1, 1]),
    (5, 13, &[1, 1, 1, 3, 11]),
    (5, 14, &[1, 3, 5, 5, 31]),
    (6, 1, &[1, 3, 3, 9, 7, 49]),
    (6, 13, &[1, 1, 1, 15, 21, 21]),
    (6, 16, &[1, 3, 1, 13, 27, 49]),
    (6, 19, &[1, 1, 1, 15, 7, 5]),
    (6, 22, &[1, 3, 1, 15, 13, 25]),
    (6, 25, &[1, 1, 5, 5, 19, 61]),
    (7, 1, &[1, 3, 7, 11, 23, 15, 103]),
    (7, 4, &[1, 3, 7, 13, 13, 15, 69]),
    (7, 7, &[1, 1, 3, 13, 7, 35, 63]),
    (7, 8, &[1, 3, 5, 9, 1, 25, 53]),
    (7, 14, &[1, 3, 1, 13, 9, 35, 107]),
    (7, 19, &[1, 3, 1, 5, 27, 61, 31]),
    (7, 21, &[1, 1, 5, 11, 19, 41, 61]),
    (7, 28, &[1, 3, 5, 3, 3, 13, 69]),
    (7, 31, &[1, 1, 7, 13, 1, 19, 1]),
    (7, 32, &[1, 3, 7, 5, 13, 19, 59]),
    (7, 37, &[1, 1, 3, 9, 25, 29, 41]),
    (7, 41, &[1, 3, 5, 13, 23, 1, 55]),
    (7, 42, &[1, 3, 7, 3, 13, 59, 17]),
    (7, 50, &[1, 3, 1, 3, 5, 53, 69]),
    (7, 55, &[1, 1, 5, 5, 23, 33, 13]),
    (7, 56, &[1, 1, 7, 7, 1, 61, 123]),
    (7, 59, &[1, 1, 7, 9, 13, 61, 49]),
    (7, 62, &[1, 3, 3, 5, 3, 55, 33]),
    (8, 14, &[1, 3, 1, 15, 31, 13, 49, 245]),
    (8, 21, &[1, 3, 5, 15, 31, 59, 63, 97]),
    (8, 22, &[1, 3, 1, 11, 11, 11, 77, 249]),
    (8, 38, &[1, 3, 1, 11, 27, 43, 71, 9]),
    (8, 47, &[1, 1, 7, 15, 21, 11, 81, 45]),
    (8, 49, &[1, 3, 7, 3, 25, 31, 65, 79]),
    (8, 50, &[1, 3, 1, 1, 19, 11, 3, 205]),
    (8, 52, &[1, 1, 5, 9, 19, 21, 29, 157]),
    (8, 56, &[1, 3, 7, 11, 1, 33, 89, 185]),
    (8, 67, &[1, 3, 3, 3, 15, 9, 79, 71]),
    (8, 70, &[1, 3, 7, 11, 15, 39, 119, 27]),
    (8, 84, &[1, 1, 3, 1, 11, 31, 97, 225]),
    (8, 97, &[1, 1, 1, 3, 23, 43, 57, 177]),
    (8, 103, &[1, 3, 7, 7, 17, 17, 37, 71]),
    (8, 115, &[1, 1, 5, 15, 15, 25, 47, 211]),
    (8, 122, &[1, 3, 7, 11, 17, 17, 89, 225]),
    (9, 8, &[1, 1, 5, 13, 9, 29, 105, 83, 421]),
    (9, 13, &[1, 1, 5, 7, 29, 25, 25, 231, 399]),
    (9, 16, &[1, 1, 3, 15, 7, 3, 97, 179, 239]),
    (9, 22, &[1, 3, 1, 9, 5, 63, 77, 251, 159]),
    (9, 25, &[1, 1, 3, 5, 31, 5, 119, 105, 463]),
    (9, 44, &[1, 1, 7, 11, 21, 27, 17, 205, 359]),
    (9, 47, &[1, 1, 7, 15, 29, 7, 97, 231, 301]),
    (9, 52, &[1, 1, 1, 13, 1, 23, 3, 49, 433]),
    (9, 55, &[1, 3, 3, 9, 29, 13, 105, 175, 453]),
    (9, 59, &[1, 3, 5, 13, 1, 7, 105, 1, 57]),
    (9, 62, &[1, 1, 1, 13, 15, 49, 31, 49, 177]),
    (9, 67, &[1, 3, 5, 13, 25, 49, 79, 99, 83]),
    (9, 74, &[1, 1, 7, 7, 13, 11, 49, 163, 231]),
    (9, 81, &[1, 3, 7, 15, 25, 15, 121, 85, 257]),
    (9, 82, &[1, 3, 7, 13, 25, 57, 113, 253, 35]),
    (9, 87, &[1, 3, 7, 5, 15, 55, 29, 251, 451]),
    (9, 91, &[1, 1, 3, 5, 13, 37, 11, 117, 493]),
    (9, 94, &[1, 1, 7, 3, 11, 31, 37, 37, 395]),
    (9, 103, &[1, 1, 3, 3, 19, 63, 43, 77, 221]),
    (9, 104, &[1, 3, 5, 9, 11, 19, 27, 175, 317]),
    (9, 109, &[1, 3, 3, 5, 31, 55, 23, 185, 159]),
    (9, 122, &[1, 1, 5, 1, 13, 57, 79, 31, 403]),
    (9, 124, &[1, 1, 1, 3, 9, 51, 53, 187, 431]),
    (9, 137, &[1, 3, 1, 13, 11, 9, 81, 193, 33]),
    (9, 138, &[1, 3, 3, 11, 5, 9, 33, 107, 471]),
    (9, 143, &[1, 1, 7, 3, 29, 55, 99, 23, 123]),
    (9, 145, &[1, 1, 7, 1, 25, 41, 65, 131, 351]),
    (9, 152, &[1, 1, 1, 5, 25, 59, 1, 13, 435]),
    (9, 157, &[1, 3, 3, 7, 1, 13, 65, 29, 437]),
    (9, 167, &[1, 3, 1, 11, 29, 15, 29, 209, 25]),
    (9, 173, &[1, 1, 1, 3, 7, 7, 81, 247, 279]),
    (9, 176, &[1, 1, 7, 1, 3, 23, 55, 213, 499]),
    (9, 181, &[1, 3, 5, 5, 19, 55, 113, 233, 85]),
    (9, 182, &[1, 1, 1, 5, 9, 33, 5, 209, 121]),
    (9, 185, &[1, 3, 5, 13, 17, 5, 17, 249, 287]),
    (9, 191, &[1, 1, 1, 1, 5, 19, 107, 23, 147]),
    (9, 194, &[1, 3, 7, 11, 11, 7, 17, 125, 67]),
    (9, 199, &[1, 1, 5, 9, 1, 31, 49, 183, 173]),
    (9, 218, &[1, 3, 1, 3, 25, 43, 91, 89, 465]),
    (9, 220, &[1, 1, 3, 13, 13, 27, 45, 217, 483]),
    (9, 227, &[1, 3, 1, 1, 15, 59, 15, 55, 165]),
    (9, 229, &[1, 1, 1, 11, 29, 49, 1, 127, 485]),
    (9, 230, &[1, 3, 7, 7, 5, 1, 87, 237, 475]),
    (9, 234, &[1, 1, 7, 13, 1, 9, 35, 97, 95]),
    (9, 236, &[1, 1, 1, 15, 17, 41, 33, 155, 331]),
    (9, 241, &[1, 3, 3, 3, 11, 29, 1, 249, 127]),
    (9, 244, &[1, 1, 1, 13, 27, 47, 127, 159, 317]),
    (9, 253, &[1, 1, 3, 15, 9, 39, 67, 11, 109]),
    (10, 4, &[1, 3, 5, 11, 25, 41, 57, 239, 281, 161]),
    (10, 13, &[1, 3, 1, 15, 15, 51, 31, 123, 315, 493]),
    (10, 19, &[1, 3, 7, 5, 27, 51, 9, 103, 201, 431]),
    (10, 22, &[1, 1, 5, 9, 23, 53, 35, 19, 19, 297]),
    (10, 50, &[1, 1, 5, 11, 27, 11, 57, 237, 157, 539]),
    (10, 55, &[1, 3, 3, 1, 21, 19, 11, 73, 433, 929]),
    (10, 64, &[1, 1, 5, 5, 5, 7, 59, 57, 421, 353]),
    (10, 69, &[1, 3, 1, 13, 29, 25, 61, 195, 391, 793]),
    (10, 98, &[1, 3, 7, 13, 19, 49, 71, 61, 293, 497]),
    (10, 107, &[1, 1, 5, 1, 19, 9, 73, 3, 109, 581]),
    (10, 115, &[1, 1, 5, 5, 15, 51, 47, 167, 181, 785]),
    (10, 121, &[1, 3, 5, 13, 15, 41, 91, 251, 431, 749]),
    (10, 127, &[1, 1, 7, 7, 31, 43, 57, 129, 221, 629]),
    (10, 134, &[1, 3, 1, 5, 13, 57, 115, 13, 293, 641]),
    (10, 140, &[1, 3, 5, 15, 17, 57, 63, 27, 251, 479]),
    (10, 145, &[1, 3, 7, 7, 19, 5, 93, 91, 139, 803]),
    (10, 152, &[1, 3, 7, 3, 11, 25, 99, 71, 383, 699]),
    (10, 158, &[1, 3, 3, 11, 23, 43, 115, 99, 497, 979]),
    (10, 161, &[1, 1, 1, 9, 1, 57, 35, 109, 511, 663]),
    (10, 171, &[1, 3, 7, 1, 11, 37, 89, 13, 229, 965]),
    (10, 181, &[1, 3, 3, 15, 3, 35, 49, 135, 147, 63]),
    (10, 194, &[1, 1, 5, 9, 21, 33, 59, 167, 375, 951]),
    (10, 199, &[1, 3, 3, 5, 23, 29, 55, 129, 283, 269]),
    (10, 203, &[1, 3, 1, 3, 21, 13, 83, 41, 427, 33]),
    (10, 208, &[1, 3, 3, 3, 17, 49, 43, 97, 151, 701]),
    (10, 227, &[1, 1, 7, 1, 9, 3, 121, 159, 133, 525]),
    (10, 242, &[1, 1, 3, 1, 19, 23, 119, 25, 235, 1011]),
    (10, 251, &[1, 3, 7, 15, 9, 1, 15, 33, 85, 979]),
    (10, 253, &[1, 1, 3, 5, 7, 55, 101, 139, 67, 849]),
    (10, 265, &[1, 1, 3, 5, 3, 37, 15, 185, 401, 339]),
    (10, 266, &[1, 1, 7, 9, 5, 31, 1, 235, 49, 759]),
    (10, 274, &[1, 1, 5, 15, 23, 13, 95, 187, 5, 803]),
    (10, 283, &[1, 1, 3, 7, 7, 51, 59, 17, 255, 299]),
    (10, 289, &[1, 3, 5, 5, 31, 25, 41, 113, 27, 1023]),
    (10, 295, &[1, 3, 1, 13, 19, 19, 113, 79, 93, 131]),
    (10, 301, &[1, 1, 3, 9, 3, 25, 51, 83, 85, 983]),
    (10, 316, &[1, 1, 7, 3, 23, 5, 105, 163, 83, 149]),
    (10, 319, &[1, 3, 5, 15, 29, 5, 91, 225, 407, 973]),
    (10, 324, &[1, 1, 3, 15, 1, 3, 125, 197, 121, 193]),
    (10, 346, &[1, 3, 1, 9, 7, 29, 113, 233, 341, 773]),
    (10, 352, &[1, 3, 1, 7, 9, 27, 115, 73, 299, 141]),
    (10, 361, &[1, 1, 1, 9, 23, 51, 119, 177, 449, 603]),
    (10, 367, &[1, 3, 1, 13, 13, 17, 99, 121, 153, 871]),
    (10, 382, &[1, 3, 3, 5, 29, 7, 85, 173, 135, 539]),
    (10, 395, &[1, 1, 5, 3, 11, 17, 31, 195, 467, 823]),
    (10, 398, &[1, 3, 3, 1, 27, 61, 69, 181, 259, 325]),
    (10, 400, &[1, 1, 3, 15, 29, 3, 63, 45, 29, 63]),
    (10, 412, &[1, 3, 1, 3, 7, 1, 43, 235, 11, 405]),
    (10, 419, &[1, 1, 7, 3, 1, 43, 97, 121, 279, 959]),
    (10, 422, &[1, 1, 5, 11, 19, 45, 69, 219, 49, 187]),
    (10, 426, &[1, 1, 7, 11, 9, 47, 49, 255, 461, 681]),
    (10, 428, &[1, 1, 5, 5, 21, 61, 125, 147, 109, 259]),
    (10, 433, &[1, 1, 1, 15, 5, 45, 63, 21, 13, 651]),
    (10, 446, &[1, 3, 5, 1, 27, 19, 69, 11, 371, 941]),
    (10, 454, &[1, 3, 3, 5, 7, 9, 93, 229, 173, 227]),
    (10, 457, &[1, 3, 7, 15, 29, 61, 45, 33, 91, 171]),
    (10, 472, &[1, 3, 3, 3, 23, 39, 23, 195, 319, 523]),
    (10, 493, &[1, 1, 5, 11, 23, 61, 37, 153, 401, 355]),
    (10, 505, &[1, 1, 1, 13, 3, 45, 77, 77, 109, 483]),
    (10, 508, &[1, 3, 3, 13, 23, 37, 7, 49, 467, 673]),
    (11, 2, &[1, 3, 1, 11, 13, 7, 59, 97, 307, 97, 1611]),
    (11, 11, &[1, 3, 1, 3, 31, 17, 21, 219, 241, 673, 921]),
    (11, 21, &[1, 3, 5, 1, 11, 31, 41, 215, 321, 23, 179]),
    (11, 22, &[1, 1, 1, 1, 11, 53, 93, 63, 245, 749, 1967]),
    (11, 35, &[1, 3, 7, 5, 15, 39, 59, 173, 67, 347, 1167]),
    (11, 49, &[1, 1, 1, 7, 3, 17, 23, 145, 283, 873, 159]),
    (11, 50, &[1, 1, 7, 9, 25, 63, 9, 103, 493, 863, 1137]),
    (11, 56, &[1, 3, 3, 15, 1, 35, 125, 153, 271, 753, 801]),
    (11, 61, &[1, 3, 7, 3, 19, 59, 9, 27, 483, 171, 1665]),
    (11, 70, &[1, 3, 5, 1, 7, 9, 53, 25, 297, 269, 133]),
    (11, 74, &[1, 1, 1, 7, 17, 17, 79, 65, 379, 495, 1969]),
    (11, 79, &[1, 3, 1, 11, 5, 57, 123, 57, 327, 801, 777]),
    (11, 84, &[1, 1, 5, 7, 21, 39, 69, 41, 231, 499, 503]),
    (11, 88, &[1, 1, 7, 3, 15, 55, 113, 117, 91, 867, 947]),
    (11, 103, &[1, 3, 7, 9, 15, 57, 107, 95, 241, 499, 847]),
    (11, 104, &[1, 1, 5, 13, 17, 31, 15, 107, 161, 209, 147]),
    (11, 112, &[1, 1, 7, 3, 15, 45, 49, 143, 137, 399, 1251]),
    (11, 115, &[1, 3, 7, 15, 9, 23, 57, 95, 235, 295, 1223]),
    (11, 117, &[1, 3, 3, 13, 15, 39, 19, 47, 75, 673, 1311]),
    (11, 122, &[1, 1, 7, 3, 25, 13, 21, 23, 363, 195, 123]),
    (11, 134, &[1, 1, 3, 5, 15, 63, 33, 95, 199, 171, 1607]),
    (11, 137, &[1, 1, 1, 11, 23, 57, 103, 121, 391, 405, 1443]),
    (11, 146, &[1, 1, 5, 1, 29, 11, 73, 39, 395, 823, 1337]),
    (11, 148, &[1, 3, 1, 3, 7, 51, 9, 93, 63, 337, 519]),
    (11, 157, &[1, 3, 5, 1, 31, 47, 79, 157, 307, 587, 1737]),
    (11, 158, &[1, 3, 7, 13, 21, 19, 97, 205, 17, 345, 283]),
    (11, 162, &[1, 1, 1, 3, 13, 13, 107, 125, 485, 89, 183]),
    (11, 164, &[1, 1, 1, 15, 15, 1, 79, 27, 209, 145, 201]),
    (11, 168, &[1, 1, 7, 15, 29, 31, 109, 109, 309, 471, 1241]),
    (11, 173, &[1, 3, 1, 11, 5, 9, 41, 123, 79, 375, 2027]),
    (11, 185, &[1, 3, 5, 1, 29, 21, 15, 71, 301, 715, 1569]),
    (11, 186, &[1, 3, 7, 11, 27, 17, 107, 47, 81, 859, 983]),
    (11, 191, &[1, 3, 5, 7, 29, 7, 1, 85, 153, 143, 245]),
    (11, 193, &[1, 1, 5, 9, 17, 25, 33, 69, 319, 5, 821]),
    (11, 199, &[1, 1, 3, 5, 27, 59, 85, 51, 329, 787, 533]),
    (11, 213, &[1, 1, 7, 9, 5, 5, 75, 19, 465, 607, 1859]),
    (11, 214, &[1, 1, 1, 11, 15, 37, 75, 247, 357, 995, 979]),
    (11, 220, &[1, 3, 5, 5, 5, 11, 5, 209, 291, 89, 1727]),
    (11, 227, &[1, 1, 7, 3, 27, 5, 107, 253, 57, 721, 1531]),
    (11, 236, &[1, 1, 3, 5, 17, 43, 81, 191, 127, 215, 273]),
    (11, 242, &[1, 1, 1, 9, 23, 49, 49, 241, 363, 509, 1897]),
    (11, 251, &[1, 1, 3, 11, 17, 29, 109, 83, 67, 385, 1273]),
    (11, 256, &[1, 1, 3, 15, 31, 13, 23, 95, 59, 361, 1189]),
    (11, 259, &[1, 3, 3, 11, 31, 1, 21, 149, 397, 535, 899]),
    (11, 265, &[1, 3, 3, 11, 23, 31, 83, 161, 319, 721, 1681]),
    (11, 266, &[1, 1, 5, 15, 29, 35, 61, 91, 5, 125, 649]),
    (11, 276, &[1, 1, 7, 5, 3, 7, 41, 11, 77, 73, 1063]),
    (11, 292, &[1, 3, 7, 13, 1, 23, 17, 113, 381, 853, 61]),
    (11, 304, &[1, 3, 1, 7, 1, 55, 83, 213, 171, 707, 1341]),
    (11, 310, &[1, 3, 3, 5, 31, 29, 75, 7, 133, 221, 1517]),
    (11, 316, &[1, 1, 3, 9, 1, 23, 53, 59, 213, 121, 1475]),
    (11, 319, &[1, 1, 1, 9, 3, 39, 27, 127, 133, 959, 913]),
    (11, 322, &[1, 3, 7, 3, 9, 59, 35, 243, 153, 497, 1903]),
    (11, 328, &[1, 3, 5, 13, 25, 17, 63, 249, 43, 763, 293]),
    (11, 334, &[1, 3, 5, 9, 3, 63, 65, 29, 203, 1007, 1211]),
    (11, 339, &[1, 3, 5, 7, 7, 27, 85, 225, 227, 65, 1745]),
    (11, 341, &[1, 3, 5, 9, 19, 13, 3, 189, 441, 645, 1909]),
    (11, 345, &[1, 3, 7, 11, 23, 57, 105, 121, 83, 241, 541]),
    (11, 346, &[1, 1, 1, 7, 9, 55, 15, 83, 5, 767, 1369]),
    (11, 362, &[1, 3, 5, 1, 21, 39, 105, 255, 213, 709, 1901]),
    (11, 367, &[1, 3, 1, 9, 15, 51, 55, 5, 165, 201, 923]),
    (11, 372, &[1, 1, 5, 3, 23, 45, 113, 153, 351, 789, 1523]),
    (11, 375, &[1, 1, 3, 3, 19, 21, 17, 81, 23, 881, 189]),
    (11, 376, &[1, 3, 3, 13, 5, 37, 41, 125, 371, 581, 575]),
    (11, 381, &[1, 1, 3, 1, 27, 51, 41, 33, 323, 343, 729]),
    (11, 385, &[1, 3, 5, 7, 23, 61, 67, 163, 283, 771, 1375]),
    (11, 388, &[1, 1, 1, 3, 5, 53, 93, 167, 61, 629, 715]),
    (11, 392, &[1, 1, 1, 1, 5, 19, 85, 239, 163, 977, 1057]),
    (11, 409, &[1, 3, 7, 1, 15, 37, 105, 249, 283, 343, 679]),
    (11, 415, &[1, 3, 7, 9, 1, 3, 49, 195, 423, 591, 77]),
    (11, 416, &[1, 3, 3, 15, 19, 45, 49, 233, 71, 405, 1567]),
    (11, 421, &[1, 1, 5, 5, 7, 31, 109, 181, 171, 751, 867]),
    (11, 428, &[1, 1, 7, 5, 23, 47, 7, 117, 203, 643, 1597]),
    (11, 431, &[1, 3, 1, 3, 31, 13, 29, 213, 471, 291, 1]),
    (11, 434, &[1, 3, 1, 5, 15, 51, 87, 9, 239, 741, 1257]),
    (11, 439, &[1, 1, 5, 5, 9, 49, 101, 51, 445, 723, 495]),
    (11, 446, &[1, 1, 1, 3, 25, 5, 31, 203, 111, 743, 1523]),
    (11, 451, &[1, 1, 3, 11, 5, 57, 117, 197, 401, 365, 1109]),
    (11, 453, &[1, 1, 3, 11, 21, 23, 61, 89, 325, 787, 943]),
    (11, 457, &[1, 3, 5, 7, 17, 29, 97, 135, 419, 679, 503]),
    (11, 458, &[1, 3, 7, 9, 13, 23, 1, 179, 155, 789, 251]),
    (11, 471, &[1, 3, 3, 7, 9, 15, 101, 103, 387, 889, 397]),
    (11, 475, &[1, 1, 3, 7, 7, 7, 73, 107, 257, 859, 571]),
    (11, 478, &[1, 1, 5, 11, 15, 37, 59, 3, 439, 747, 141]),
    (11, 484, &[1, 3, 5, 9, 15, 49, 59, 231, 167, 139, 955]),
    (11, 493, &[1, 1, 1, 13, 1, 55, 123, 47, 347, 367, 1743]),
    (11, 494, &[1, 1, 3, 1, 3, 45, 9, 147, 245, 829, 307]),
    (11, 499, &[1, 3, 5, 13, 25, 3, 97, 101, 313, 909, 241]),
    (11, 502, &[1, 3, 3, 11, 11, 35, 91, 83, 141, 317, 797]),
    (11, 517, &[1, 3, 3, 15, 5, 3, 99, 117, 275, 655, 1251]),
    (11, 518, &[1, 1, 1, 15, 17, 5, 35, 191, 213, 653, 589]),
    (11, 524, &[1, 1, 7, 11, 29, 55, 123, 169, 201, 471, 1479]),
    (11, 527, &[1, 1, 3, 9, 11, 13, 85, 191, 335, 589, 1919]),
    (11, 555, &[1, 1, 1, 5, 7, 43, 37, 243, 399, 371, 1049]),
    (11, 560, &[1, 1, 5, 5, 19, 25, 115, 179, 163, 815, 1529]),
    (11, 565, &[1, 1, 3, 13, 7, 27, 117, 195, 43, 823, 697]),
    (11, 569, &[1, 1, 1, 1, 23, 53, 109, 15, 7, 561, 779]),
    (11, 578, &[1, 1, 7, 1, 19, 55, 9, 145, 305, 553, 425]),
    (11, 580, &[1, 1, 7, 1, 1, 49, 43, 129, 261, 553, 549]),
    (11, 587, &[1, 1, 3, 3, 1, 27, 17, 223, 493, 853, 345]),
    (11, 589, &[1, 1, 7, 3, 13, 21, 27, 197, 101, 1005, 1379]),
    (11, 590, &[1, 1, 7, 13, 13, 53, 67, 79, 87, 875, 1693]),
    (11, 601, &[1, 1, 3, 3, 9, 11, 25, 47, 411, 693, 1791]),
    (11, 607, &[1, 3, 7, 9, 29, 1, 59, 251, 91, 101, 437]),
    (11, 611, &[1, 3, 3, 3, 15, 33, 83, 71, 367, 537, 265]),
    (11, 614, &[1, 1, 7, 13, 25, 59, 57, 59, 277, 17, 1719]),
    (11, 617, &[1, 3, 5, 3, 25, 49, 15, 129, 477, 655, 433]),
    (11, 618, &[1, 1, 1, 1, 9, 13, 125, 233, 413, 167, 1505]),
    (11, 625, &[1, 3, 7, 7, 15, 3, 75, 29, 427, 835, 529]),
    (11, 628, &[1, 3, 3, 9, 19, 63, 9, 87, 25, 123, 1309]),
    (11, 635, &[1, 1, 7, 5, 19, 7, 89, 43, 401, 513, 1469]),
    (11, 641, &[1, 1, 5, 11, 25, 33, 9, 29, 201, 267, 2013]),
    (11, 647, &[1, 3, 7, 1, 29, 21, 11, 49, 415, 147, 1603]),
    (11, 654, &[1, 3, 3, 15, 9, 47, 11, 141, 243, 875, 1519]),
    (11, 659, &[1, 1, 7, 13, 1, 19, 95, 109, 37, 801, 777]),
    (11, 662, &[1, 3, 5, 9, 1, 19, 33, 229, 493, 855, 1737]),
    (11, 672, &[1, 3, 1, 13, 3, 1, 55, 205, 279, 69, 1423]),
    (11, 675, &[1, 1, 1, 3, 27, 13, 95, 175, 331, 303, 1927]),
    (11, 682, &[1, 3, 1, 7, 21, 17, 19, 7, 497, 447, 1045]),
    (11, 684, &[1, 1, 3, 9, 27, 53, 125, 249, 39, 201, 1799]),
    (11, 689, &[1, 3, 7, 3, 23, 11, 37, 77, 11, 419, 477]),
    (11, 695, &[1, 3, 1, 7, 25, 59, 85, 147, 355, 159, 45]),
    (11, 696, &[1, 3, 7, 5, 29, 23, 125, 53, 71, 953, 1555]),
    (11, 713, &[1, 3, 7, 5, 3, 35, 117, 237, 213, 7, 257]),
    (11, 719, &[1, 3, 3, 1, 7, 47, 65, 163, 355, 429, 521]),
    (11, 724, &[1, 1, 3, 7, 21, 45, 11, 219, 143, 859, 1069]),
    (11, 733, &[1, 1, 1, 11, 27, 53, 109, 95, 349, 625, 515]),
    (11, 734, &[1, 1, 7, 9, 31, 55, 85, 135, 115, 445, 1269]),
    (11, 740, &[1, 3, 5, 13, 19, 31, 95, 139, 95, 575, 1865]),
    (11, 747, &[1, 1, 1, 11, 17, 39, 63, 183, 275, 479, 1089]),
    (11, 749, &[1, 3, 5, 1, 17, 33, 33, 147, 37, 805, 867]),
    (11, 752, &[1, 3, 5, 5, 5, 5, 93, 213, 317, 785, 207]),
    (11, 755, &[1, 1, 3, 9, 5, 29, 41, 43, 489, 455, 825]),
    (11, 762, &[1, 3, 5, 3, 3, 35, 95, 65, 181, 213, 611]),
    (11, 770, &[1, 3, 1, 15, 1, 33, 125, 205, 243, 589, 1319]),
    (11, 782, &[1, 1, 7, 11, 31, 7, 73, 45, 327, 885, 699]),
    (11, 784, &[1, 3, 5, 1, 21, 13, 37, 157, 451, 283, 685]),
    (11, 787, &[1, 1, 5, 7, 31, 1, 127, 63, 157, 383, 1973]),
    (11, 789, &[1, 1, 5, 3, 1, 3, 15, 139, 237, 407, 901]),
    (11, 793, &[1, 1, 1, 15, 27, 25, 49, 53, 381, 253, 1085]),
    (11, 796, &[1, 3, 7, 1, 25, 57, 99, 71, 345, 1001, 351]),
    (11, 803, &[1, 3, 5, 11, 11, 21, 19, 17, 503, 663, 1043]),
    (11, 805, &[1, 3, 3, 5, 5, 29, 79, 37, 43, 225, 581]),
    (11, 810, &[1, 3, 1, 13, 27, 23, 21, 127, 133, 829, 1861]),
    (11, 815, &[1, 3, 1, 11, 25, 15, 73, 251, 453, 883, 901]),
    (11, 824, &[1, 1, 1, 3, 21, 31, 9, 105, 311, 481, 1801]),
    (11, 829, &[1, 3, 3, 13, 29, 19, 23, 131, 15, 171, 781]),
    (11, 830, &[1, 3, 1, 5, 11, 53, 39, 71, 239, 807, 1541]),
    (11, 832, &[1, 1, 1, 7, 17, 37, 37, 175, 345, 35, 1359]),
    (11, 841, &[1, 1, 1, 9, 1, 9, 121, 55, 487, 809, 1473]),
    (11, 847, &[1, 1, 1, 3, 23, 41, 89, 239, 339, 581, 1259]),
    (11, 849, &[1, 1, 3, 13, 5, 55, 61, 95, 123, 603, 159]),
    (11, 861, &[1, 1, 7, 13, 29, 39, 37, 33, 327, 831, 301]),
    (11, 871, &[1, 3, 3, 15, 7, 3, 107, 97, 5, 303, 1445]),
    (11, 878, &[1, 3, 3, 13, 19, 55, 127, 117, 141, 71, 1493]),
    (11, 889, &[1, 1, 7, 15, 1, 33, 69, 187, 371, 391, 1087]),
    (11, 892, &[1, 1, 3, 3, 17, 45, 121, 43, 309, 21, 387]),
    (11, 901, &[1, 3, 3, 5, 25, 3, 81, 217, 15, 405, 815]),
    (11, 908, &[1, 1, 7, 9, 25, 19, 29, 171, 97, 43, 429]),
    (11, 920, &[1, 3, 3, 7, 25, 13, 107, 123, 389, 679, 1471]),
    (11, 923, &[1, 3, 5, 3, 1, 3, 81, 41, 29, 17, 647]),
    (11, 942, &[1, 1, 7, 15, 13, 17, 51, 219, 269, 979, 1739]),
    (11, 949, &[1, 3, 1, 3, 29, 29, 59, 241, 107, 173, 403]),
    (11, 950, &[1, 1, 3, 9, 23, 31, 95, 147, 47, 845, 823]),
    (11, 954, &[1, 3, 3, 15, 19, 29, 39, 179, 379, 749, 1919]),
    (11, 961, &[1, 3, 7, 15, 19, 63, 89, 189, 139, 825, 1279]),
    (11, 968, &[1, 1, 5, 7, 31, 47, 49, 149, 201, 753, 1993]),
    (11, 971, &[1, 1, 3, 1, 25, 23, 77, 31, 33, 835, 167]),
    (11, 973, &[1, 1, 1, 1, 3, 21, 103, 143, 221, 103, 437]),
    (11, 979, &[1, 1, 3, 5, 3, 35, 39, 155, 195, 41, 565]),
    (11, 982, &[1, 1, 5, 3, 27, 39, 61, 237, 343, 973, 1775]),
    (11, 986, &[1, 3, 7, 15, 23, 45, 65, 97, 203, 131, 1503]),
    (11, 998, &[1, 1, 7, 1, 11, 47, 7, 125, 417, 413, 589]),
    (11, 1001, &[1, 1, 7, 9, 17, 3, 87, 223, 347, 135, 1879]),
    (11, 1010, &[1, 3, 5, 3, 23, 3, 113, 187, 389, 67, 503]),
    (11, 1012, &[1, 1, 3, 3, 3, 23, 125, 71, 363, 771, 91]),
    (12, 41, &[1, 3, 7, 15, 19, 29, 7, 217, 125, 143, 1539, 1481]),
    (12, 52, &[1, 1, 5, 15, 21, 51, 39, 251, 173, 663, 1295, 3635]),
    (12, 61, &[1, 1, 1, 1, 23, 3, 125, 25, 457, 301, 2035, 2093]),
    (12, 62, &[1, 3, 7, 1, 1, 7, 69, 175, 425, 717, 1705, 3091]),
    (12, 76, &[1, 3, 3, 5, 1, 37, 39, 47, 299, 1001, 1739, 1103]),
    (12, 104, &[1, 3, 7, 7, 13, 35, 107, 237, 99, 113, 1619, 2561]),
    (12, 117, &[1, 3, 3, 7, 3, 29, 51, 67, 355, 481, 705, 1743]),
    (12, 131, &[1, 3, 3, 3, 31, 51, 5, 105, 137, 305, 1209, 483]),
    (12, 143, &[1, 3, 5, 1, 21, 57, 41, 177, 261, 637, 865, 3265]),
    (12, 145, &[1, 3, 5, 11, 25, 3, 123, 97, 163, 815, 435, 1489]),
    (12, 157, &[1, 3, 5, 3, 13, 27, 15, 179, 161, 191, 1511, 777]),
    (12, 167, &[1, 1, 1, 13, 5, 23, 57, 21, 65, 873, 1121, 1105]),
    (12, 171, &[1, 3, 1, 9, 31, 31, 15, 219, 31, 309, 1521, 793]),
    (12, 176, &[1, 3, 5, 13, 11, 21, 67, 65, 169, 185, 2045, 2335]),
    (12, 181, &[1, 3, 3, 15, 25, 23, 71, 1, 503, 929, 757, 3955]),
    (12, 194, &[1, 3, 1, 11, 13, 5, 123, 31, 503, 353, 1387, 3373]),
    (12, 217, &[1, 1, 3, 5, 21, 61, 53, 53, 317, 507, 1759, 2737]),
    (12, 236, &[1, 3, 1, 7, 5, 55, 121, 53, 107, 865, 633, 849]),
    (12, 239, &[1, 1, 3, 11, 1, 31, 69, 217, 189, 127, 1305, 4009]),
    (12, 262, &[1, 3, 5, 5, 3, 11, 23, 79, 415, 439, 445, 2485]),
    (12, 283, &[1, 1, 3, 9, 9, 49, 9, 91, 353, 87, 911, 3731]),
    (12, 286, &[1, 3, 3, 3, 15, 31, 43, 239, 271, 383, 709, 1121]),
    (12, 307, &[1, 1, 3, 9, 9, 25, 123, 3, 333, 851, 731, 3125]),
    (12, 313, &[1, 1, 7, 13, 19, 45, 95, 209, 285, 29, 1301, 3509]),
    (12, 319, &[1, 1, 1, 9, 21, 61, 77, 247, 73, 209, 1643, 2667]),
    (12, 348, &[1, 1, 5, 3, 15, 11, 37, 205, 181, 563, 1907, 3063]),
    (12, 352, &[1, 3, 1, 11, 9, 57, 55, 119, 453, 651, 1209, 3133]),
    (12, 357, &[1, 3, 7, 3, 23, 43, 29, 121, 155, 771, 1987, 391]),
    (12, 391, &[1, 3, 1, 9, 23, 33, 111, 9, 349, 475, 25, 2409]),
    (12, 398, &[1, 3, 7, 7, 21, 61, 123, 173, 23, 181, 593, 2551]),
    (12, 400, &[1, 3, 3, 15, 5, 51, 83, 83, 275, 821, 847, 3741]),
    (12, 412, &[1, 3, 3, 9, 27, 37, 111, 115, 63, 129, 539, 789]),
    (12, 415, &[1, 1, 5, 11, 13, 43, 39, 239, 295, 175, 1759, 1103]),
    (12, 422, &[1, 1, 5, 7, 21, 1, 57, 131, 207, 147, 1711, 4011]),
    (12, 440, &[1, 1, 3, 13, 1, 57, 81, 223, 23, 887, 433, 1821]),
    (12, 460, &[1, 1, 7, 3, 11, 61, 107, 165, 247, 15, 1363, 3999]),
    (12, 465, &[1, 1, 5, 11, 29, 1, 95, 87, 473, 395, 925, 3353]),
    (12, 468, &[1, 1, 5, 9, 27, 51, 27, 91, 431, 483, 211, 1225]),
    (12, 515, &[1, 3, 1, 1, 29, 9, 37, 33, 199, 21, 299, 2347]),
    (12, 536, &[1, 1, 1, 13, 17, 3, 5, 137, 11, 993, 725, 635]),
    (12, 539, &[1, 1, 1, 15, 7, 35, 49, 205, 325, 843, 1177, 1493]),
    (12, 551, &[1, 1, 5, 3, 19, 47, 107, 113, 181, 661, 433, 99]),
    (12, 558, &[1, 3, 5, 15, 31, 21, 107, 227, 319, 953, 1423, 3371]),
    (12, 563, &[1, 1, 3, 13, 31, 35, 59, 183, 495, 613, 1169, 3497]),
    (12, 570, &[1, 3, 5, 9, 29, 39, 33, 67, 145, 841, 1503, 2821]),
    (12, 595, &[1, 3, 5, 5, 15, 9, 77, 75, 265, 415, 1227, 3059]),
    (12, 598, &[1, 3, 1, 15, 15, 15, 75, 43, 499, 693, 301, 4083]),
    (12, 617, &[1, 1, 1, 7, 17, 45, 43, 117, 207, 863, 1325, 2701]),
    (12, 647, &[1, 1, 3, 7, 11, 45, 7, 209, 225, 961, 291, 1379]),
    (12, 654, &[1, 1, 5, 13, 11, 7, 7, 69, 341, 889, 1745, 2069]),
    (12, 678, &[1, 3, 3, 3, 31, 11, 53, 201, 79, 839, 117, 3611]),
    (12, 713, &[1, 1, 1, 7, 23, 57, 107, 25, 95, 67, 1435, 821]),
    (12, 738, &[1, 3, 1, 13, 25, 43, 101, 203, 51, 885, 65, 2123]),
    (12, 747, &[1, 1, 7, 7, 15, 7, 91, 87, 287, 431, 1943, 3127]),
    (12, 750, &[1, 1, 7, 9, 17, 59, 17, 161, 263, 891, 485, 241]),
    (12, 757, &[1, 1, 1, 15, 9, 11, 47, 39, 347, 187, 1585, 2013]),
    (12, 772, &[1, 3, 5, 15, 1, 57, 51, 17, 129, 509, 1477, 3951]),
    (12, 803, &[1, 3, 7, 1, 3, 37, 49, 89, 319, 515, 167, 1375]),
    (12, 810, &[1, 3, 3, 11, 21, 17, 89, 119, 409, 543, 933, 3619]),
    (12, 812, &[1, 3, 7, 5, 21, 17, 121, 189, 215, 793, 135, 2871]),
    (12, 850, &[1, 1, 1, 11, 15, 53, 113, 99, 23, 845, 63, 3459]),
    (12, 862, &[1, 1, 3, 1, 19, 53, 83, 3, 239, 539, 1293, 3835]),
    (12, 906, &[1, 3, 3, 5, 3, 3, 33, 63, 503, 153, 1511, 1553]),
    (12, 908, &[1, 3, 7, 15, 25, 41, 117, 59, 97, 583, 1331, 247]),
    (12, 929, &[1, 3, 3, 13, 11, 17, 25, 231, 471, 1007, 193, 1157]),
    (12, 930, &[1, 3, 7, 3, 1, 51, 11, 95, 139, 195, 351, 2793]),
    (12, 954, &[1, 3, 3, 7, 31, 21, 115, 83, 395, 729, 1179, 1463]),
    (12, 964, &[1, 1, 5, 13, 21, 63, 39, 205, 63, 561, 1829, 2595]),
    (12, 982, &[1, 1, 5, 7, 23, 25, 85, 187, 175, 225, 1569, 341]),
    (12, 985, &[1, 3, 5, 1, 17, 15, 13, 37, 431, 873, 1289, 2493]),
    (12, 991, &[1, 1, 1, 7, 31, 1, 41, 171, 217, 911, 59, 1773]),
    (12, 992, &[1, 1, 3, 7, 3, 29, 113, 21, 361, 845, 615, 2431]),
    (12, 1067, &[1, 3, 7, 3, 15, 33, 117, 39, 379, 255, 1475, 345]),
    (12, 1070, &[1, 1, 1, 11, 1, 1, 95, 177, 21, 691, 707, 3675]),
    (12, 1096, &[1, 1, 7, 3, 27, 49, 39, 199, 171, 845, 1237, 2971]),
    (12, 1099, &[1, 1, 3, 1, 11, 35, 7, 107, 413, 127, 253, 1239]),
    (12, 1116, &[1, 3, 5, 11, 19, 61, 107, 167, 109, 995, 1427, 121]),
    (12, 1143, &[1, 1, 1, 11, 15, 21, 113, 43, 371, 387, 1485, 1473]),
    (12, 1165, &[1, 1, 7, 9, 25, 19, 49, 125, 385, 227, 1029, 2045]),
    (12, 1178, &[1, 3, 5, 7, 9, 49, 71, 241, 119, 463, 2013, 131]),
    (12, 1184, &[1, 1, 7, 7, 5, 63, 99, 179, 223, 949, 1745, 873]),
    (12, 1202, &[1, 3, 3, 3, 25, 45, 71, 61, 149, 669, 131, 2175]),
    (12, 1213, &[1, 3, 5, 13, 25, 15, 101, 93, 39, 107, 321, 2617]),
    (12, 1221, &[1, 3, 7, 1, 25, 49, 53, 169, 285, 227, 1287, 3233]),
    (12, 1240, &[1, 1, 5, 11, 13, 23, 123, 71, 315, 889, 2031, 579]),
    (12, 1246, &[1, 1, 7, 15, 5, 55, 13, 99, 9, 1019, 1471, 2879]),
    (12, 1252, &[1, 3, 5, 5, 17, 41, 37, 95, 211, 223, 1967, 1243]),
    (12, 1255, &[1, 1, 1, 9, 21, 37, 77, 253, 73, 135, 1991, 2679]),
    (12, 1267, &[1, 3, 1, 3, 25, 11, 97, 225, 239, 997, 477, 3383]),
    (12, 1293, &[1, 3, 5, 1, 5, 9, 125, 243, 57, 557, 625, 1245]),
    (12, 1301, &[1, 3, 1, 5, 9, 53, 47, 209, 217, 107, 575, 25]),
    (12, 1305, &[1, 3, 5, 13, 13, 45, 113, 79, 207, 13, 243, 359]),
    (12, 1332, &[1, 1, 5, 9, 31, 35, 59, 91, 287, 537, 415, 1469]),
    (12, 1349, &[1, 1, 3, 15, 3, 57, 39, 109, 349, 345, 1009, 579]),
    (12, 1384, &[1, 3, 5, 15, 19, 41, 71, 27, 449, 1023, 1047, 4057]),
    (12, 1392, &[1, 1, 7, 9, 27, 25, 89, 193, 447, 1009, 985, 1027]),
    (12, 1402, &[1, 1, 7, 5, 5, 1, 31, 151, 421, 797, 433, 3389]),
    (12, 1413, &[1, 1, 3, 5, 7, 3, 33, 135, 323, 1015, 1767, 2681]),
    (12, 1417, &[1, 1, 3, 15, 13, 41, 47, 195, 101, 663, 813, 3481]),
    (12, 1423, &[1, 1, 7, 1, 7, 5, 125, 93, 345, 385, 573, 3979]),
    (12, 1451, &[1, 1, 1, 9, 17, 25, 29, 211, 213, 225, 777, 3245]),
    (12, 1480, &[1, 3, 5, 11, 25, 25, 11, 139, 393, 977, 985, 3725]),
    (12, 1491, &[1, 3, 3, 3, 17, 27, 81, 91, 145, 847, 289, 627]),
    (12, 1503, &[1, 1, 7, 1, 29, 47, 95, 113, 407, 341, 371, 313]),
    (12, 1504, &[1, 3, 7, 15, 19, 51, 55, 17, 313, 309, 457, 1]),
    (12, 1513, &[1, 3, 7, 13, 9, 35, 1, 241, 47, 295, 1777, 97]),
    (12, 1538, &[1, 1, 3, 11, 1, 19, 77, 161, 407, 835, 689, 459]),
    (12, 1544, &[1, 3, 7, 5, 27, 25, 125, 7, 353, 263, 771, 2605]),
    (12, 1547, &[1, 3, 1, 15, 1, 45, 109, 205, 295, 793, 1235, 2375]),
    (12, 1555, &[1, 3, 3, 11, 19, 37, 15, 29, 75, 457, 535, 3769]),
    (12, 1574, &[1, 1, 7, 5, 19, 9, 99, 213, 61, 273, 145, 3579]),
    (12, 1603, &[1, 3, 3, 7, 15, 25, 91, 247, 257, 481, 1995, 2195]),
    (12, 1615, &[1, 3, 3, 5, 31, 11, 41, 167, 375, 289, 599, 63]),
    (12, 1618, &[1, 3, 7, 3, 21, 7, 117, 177, 51, 403, 699, 3323]),
    (12, 1629, &[1, 1, 7, 9, 19, 41, 77, 153, 193, 723, 627, 1351]),
    (12, 1634, &[1, 3, 3, 7, 5, 55, 107, 227, 225, 23, 1511, 549]),
    (12, 1636, &[1, 3, 1, 13, 13, 55, 41, 39, 265, 109, 1407, 2407]),
    (12, 1639, &[1, 3, 5, 3, 7, 33, 21, 163, 59, 421, 1739, 2099]),
    (12, 1657, &[1, 3, 3, 11, 11, 9, 99, 51, 49, 77, 697, 2469]),
    (12, 1667, &[1, 1, 1, 5, 23, 13, 5, 73, 259, 513, 623, 361]),
    (12, 1681, &[1, 3, 1, 9, 15, 7, 81, 141, 79, 723, 361, 2241]),
    (12, 1697, &[1, 1, 5, 7, 17, 3, 121, 21, 367, 877, 605, 2857]),
    (12, 1704, &[1, 1, 1, 1, 25, 61, 93, 219, 437, 355, 1139, 895]),
    (12, 1709, &[1, 3, 5, 1, 3, 43, 3, 163, 429, 93, 1063, 2739]),
    (12, 1722, &[1, 1, 3, 7, 15, 51, 111, 115, 101, 145, 1927, 3755]),
    (12, 1730, &[1, 3, 5, 5, 3, 3, 127, 239, 319, 423, 1545, 1855]),
    (12, 1732, &[1, 1, 1, 1, 17, 57, 47, 207, 323, 105, 1331, 3541]),
    (12, 1802, &[1, 1, 5, 13, 17, 33, 35, 133, 395, 387, 1653, 1389]),
    (12, 1804, &[1, 1, 1, 7, 25, 47, 61, 127, 443, 739, 1727, 1641]),
    (12, 1815, &[1, 3, 7, 5, 25, 33, 77, 141, 115, 355, 1179, 219]),
    (12, 1826, &[1, 3, 7, 9, 13, 21, 29, 201, 1, 67, 139, 3783]),
    (12, 1832, &[1, 3, 5, 3, 7, 29, 85, 45, 17, 457, 869, 3501]),
    (12, 1843, &[1, 1, 7, 15, 29, 21, 103, 235, 1, 769, 339, 3993]),
    (12, 1849, &[1, 3, 5, 3, 7, 5, 105, 161, 63, 129, 1, 3917]),
    (12, 1863, &[1, 1, 7, 13, 29, 15, 95, 101, 451, 753, 17, 3043]),
    (12, 1905, &[1, 3, 1, 7, 19, 23, 61, 7, 333, 539, 793, 535]),
    (12, 1928, &[1, 3, 7, 13, 1, 5, 67, 127, 167, 69, 1381, 1397]),
    (12, 1933, &[1, 3, 3, 3, 1, 15, 3, 141, 331, 613, 1001, 1453]),
    (12, 1939, &[1, 3, 3, 3, 13, 57, 35, 99, 129, 557, 1253, 505]),
    (12, 1976, &[1, 3, 7, 9, 17, 47, 115, 13, 217, 957, 1163, 1123]),
    (12, 1996, &[1, 3, 5, 11, 9, 21, 53, 5, 129, 897, 1515, 2689]),
    (12, 2013, &[1, 3, 1, 11, 27, 51, 91, 193, 3, 587, 1693, 2495]),
    (12, 2014, &[1, 3, 1, 5, 7, 47, 31, 199, 447, 281, 1675, 305]),
    (12, 2020, &[1, 1, 3, 9, 13, 61, 15, 255, 491, 1003, 885, 1469]),
    (13, 13, &[1, 3, 7, 1, 21, 11, 127, 205, 483, 365, 323, 1735, 7653]),
    (13, 19, &[1, 1, 7, 13, 21, 57, 29, 175, 213, 459, 881, 1597, 7919]),
    (13, 26, &[1, 1, 3, 11, 1, 61, 81, 57, 35, 411, 927, 1491, 3175]),
    (13, 41, &[1, 1, 5, 7, 21, 53, 95, 157, 491, 421, 765, 1113, 6173]),
    (13, 50, &[1, 1, 5, 7, 25, 41, 87, 59, 11, 443, 1051, 613, 2799]),
    (13, 55, &[1, 1, 3, 9, 11, 25, 109, 81, 239, 361, 653, 2345, 6113]),
    (13, 69, &[1, 3, 5, 15, 13, 57, 1, 213, 207, 79, 287, 1897, 4403]),
    (13, 70, &[1, 1, 5, 9, 27, 51, 59, 5, 19, 281, 217, 1797, 2563]),
    (13, 79, &[1, 3, 3, 11, 21, 59, 111, 111, 479, 545, 1965, 2165, 2225]),
    (13, 82, &[1, 3, 1, 3, 31, 5, 9, 179, 169, 851, 1489, 3487, 5721]),
    (13, 87, &[1, 3, 3, 11, 11, 45, 107, 251, 283, 365, 1543, 3757, 4239]),
    (13, 93, &[1, 1, 5, 7, 27, 61, 67, 247, 201, 257, 521, 1225, 4659]),
    (13, 94, &[1, 3, 1, 7, 17, 31, 69, 133, 143, 455, 155, 2891, 5957]),
    (13, 97, &[1, 3, 7, 3, 23, 11, 25, 151, 325, 345, 37, 119, 4261]),
    (13, 100, &[1, 3, 1, 5, 7, 15, 117, 219, 309, 847, 1389, 2905, 5411]),
    (13, 112, &[1, 3, 3, 15, 21, 29, 9, 139, 265, 1011, 1447, 1417, 5853]),
    (13, 121, &[1, 1, 3, 3, 23, 51, 125, 247, 25, 895, 1625, 1987, 1713]),
    (13, 134, &[1, 1, 3, 11, 5, 1, 103, 209, 341, 715, 895, 1715, 7689]),
    (13, 138, &[1, 3, 3, 11, 31, 31, 25, 39, 323, 93, 1151, 3477, 2779]),
    (13, 148, &[1, 3, 3, 13, 1, 27, 3, 123, 263, 579, 547, 3937, 5765]),
    (13, 151, &[1, 3, 5, 11, 9, 27, 15, 81, 259, 17, 1299, 3523, 3423]),
    (13, 157, &[1, 3, 5, 3, 1, 25, 19, 177, 411, 925, 443, 595, 8141]),
    (13, 161, &[1, 1, 7, 15, 5, 47, 63, 65, 7, 737, 13, 2997, 4607]),
    (13, 179, &[1, 3, 7, 7, 1, 25, 127, 65, 503, 1013, 1127, 463, 7147]),
    (13, 181, &[1, 3, 5, 1, 7, 25, 127, 163, 95, 351, 147, 1869, 683]),
    (13, 188, &[1, 3, 1, 15, 7, 63, 51, 17, 89, 285, 757, 1179, 4415]),
    (13, 196, &[1, 1, 3, 3, 23, 55, 105, 65, 33, 455, 1671, 2533, 3161]),
    (13, 203, &[1, 3, 3, 9, 15, 63, 111, 99, 69, 811, 1649, 2033, 739]),
    (13, 206, &[1, 3, 3, 7, 7, 35, 89, 39, 241, 83, 1081, 3589, 7339]),
    (13, 223, &[1, 1, 1, 5, 11, 61, 67, 35, 231, 561, 1501, 1745, 6339]),
    (13, 224, &[1, 3, 5, 11, 27, 15, 15, 201, 415, 207, 371, 2891, 3859]),
    (13, 227, &[1, 3, 7, 5, 11, 7, 109, 163, 511, 819, 563, 3675, 3929]),
    (13, 230, &[1, 1, 3, 5, 21, 37, 13, 7, 85, 857, 631, 343, 4445]),
    (13, 239, &[1, 3, 5, 7, 21, 25, 103, 255, 443, 677, 1185, 1827, 7485]),
    (13, 241, &[1, 3, 7, 3, 17, 57, 27, 85, 49, 889, 991, 853, 1899]),
    (13, 248, &[1, 1, 7, 15, 31, 51, 115, 225, 389, 715, 467, 315, 6427]),
    (13, 253, &[1, 1, 7, 13, 11, 61, 17, 211, 25, 597, 729, 3069, 6715]),
    (13, 268, &[1, 1, 1, 7, 5, 61, 7, 227, 81, 217, 799, 3971, 5409]),
    (13, 274, &[1, 1, 5, 1, 5, 41, 9, 235, 425, 625, 407, 3021, 5609]),
    (13, 283, &[1, 1, 3, 15, 7, 7, 107, 189, 13, 581, 1623, 3427, 5063]),
    (13, 286, &[1, 3, 7, 9, 15, 51, 11, 17, 3, 269, 1405, 1385, 511]),
    (13, 289, &[1, 1, 3, 15, 1, 25, 1, 193, 235, 321, 1471, 2557, 6737]),
    (13, 301, &[1, 1, 3, 5, 17, 33, 23, 181, 405, 11, 1639, 3811, 2743]),
    (13, 302, &[1, 3, 5, 15, 15, 41, 31, 25, 437, 337, 1155, 3427, 1085]),
    (13, 316, &[1, 1, 5, 3, 3, 35, 103, 9, 449, 943, 1097, 999, 3959]),
    (13, 319, &[1, 1, 1, 15, 31, 15, 125, 219, 263, 435, 1049, 2001, 175]),
    (13, 324, &[1, 3, 5, 5, 11, 23, 111, 79, 69, 287, 1865, 1959, 7431]),
    (13, 331, &[1, 1, 7, 13, 1, 35, 83, 149, 197, 955, 959, 3825, 4591]),
    (13, 333, &[1, 1, 7, 5, 23, 59, 31, 65, 165, 25, 1313, 2183, 7275]),
    (13, 345, &[1, 1, 3, 9, 7, 63, 93, 203, 87, 785, 71, 2129, 97]),
    (13, 351, &[1, 3, 3, 11, 27, 49, 13, 167, 425, 541, 1939, 1705, 4679]),
    (13, 358, &[1, 1, 7, 13, 13, 25, 67, 21, 39, 341, 131, 1907, 6173]),
    (13, 375, &[1, 1, 7, 5, 11, 3, 59, 177, 249, 59, 289, 21, 5605]),
    (13, 379, &[1, 1, 7, 3, 25, 3, 63, 229, 315, 767, 1735, 1393, 5883]),
    (13, 381, &[1, 3, 5, 15, 21, 61, 41, 29, 449, 823, 1191, 3535, 2749]),
    (13, 386, &[1, 3, 1, 13, 11, 55, 109, 135, 109, 217, 177, 567, 817]),
    (13, 403, &[1, 3, 7, 13, 11, 9, 53, 57, 49, 431, 1277, 371, 4819]),
    (13, 405, &[1, 3, 1, 5, 23, 45, 113, 153, 215, 41, 1765, 251, 4553]),
    (13, 419, &[1, 1, 3, 7, 13, 53, 19, 75, 199, 303, 211, 3331, 2719]),
    (13, 426, &[1, 3, 7, 1, 7, 55, 125, 249, 249, 139, 213, 603, 5455]),
    (13, 428, &[1, 1, 3, 15, 7, 45, 27, 115, 203, 979, 233, 3911, 1667]),
    (13, 439, &[1, 3, 5, 1, 7, 13, 21, 23, 269, 83, 1789, 527, 2743]),
    (13, 440, &[1, 3, 3, 7, 5, 27, 13, 253, 259, 339, 1187, 553, 1787]),
    (13, 446, &[1, 1, 1, 15, 27, 19, 11, 233, 229, 783, 1681, 1441, 3493]),
    (13, 451, &[1, 3, 1, 1, 1, 15, 51, 243, 145, 667, 219, 1215, 4215]),
    (13, 454, &[1, 1, 5, 11, 29, 19, 97, 81, 449, 509, 211, 2641, 5537]),
    (13, 458, &[1, 3, 3, 11, 31, 33, 125, 123, 163, 711, 1389, 2771, 6539]),
    (13, 465, &[1, 1, 1, 9, 7, 27, 59, 89, 327, 305, 1967, 3203, 1939]),
    (13, 468, &[1, 1, 7, 13, 23, 3, 41, 89, 43, 409, 835, 643, 1533]),
    (13, 472, &[1, 1, 1, 3, 13, 55, 27, 237, 443, 823, 1189, 3017, 5049]),
    (13, 475, &[1, 1, 1, 3, 31, 3, 13, 93, 283, 269, 1267, 2615, 7671]),
    (13, 477, &[1, 3, 3, 1, 9, 35, 81, 123, 3, 681, 51, 1243, 7207]),
    (13, 496, &[1, 1, 3, 15, 5, 53, 125, 69, 319, 365, 745, 3331, 583]),
    (13, 502, &[1, 3, 5, 15, 15, 37, 127, 87, 181, 403, 1593, 3415, 6437]),
    (13, 508, &[1, 3, 1, 5, 7, 29, 111, 69, 45, 195, 1629, 2715, 6427]),
    (13, 517, &[1, 1, 3, 9, 13, 59, 53, 247, 117, 961, 1767, 2613, 4987]),
    (13, 521, &[1, 1, 1, 9, 3, 1, 93, 23, 387, 859, 1537, 3849, 6869]),
    (13, 527, &[1, 1, 1, 9, 29, 49, 115, 241, 479, 429, 1657, 2095, 2271]),
    (13, 530, &[1, 1, 7, 11, 31, 17, 103, 15, 197, 833, 779, 1041, 5259]),
    (13, 532, &[1, 1, 7, 3, 19, 45, 121, 85, 301, 665, 635, 1547, 1705]),
    (13, 542, &[1, 1, 1, 13, 17, 53, 7, 65, 73, 729, 1853, 1353, 7011]),
    (13, 552, &[1, 1, 1, 3, 27, 41, 43, 155, 51, 85, 1279, 3871, 6591]),
    (13, 555, &[1, 1, 5, 1, 19, 31, 17, 121, 461, 389, 599, 2653, 1655]),
    (13, 560, &[1, 1, 5, 7, 21, 49, 1, 15, 149, 85, 1945, 1585, 2187]),
    (13, 566, &[1, 1, 5, 3, 13, 35, 115, 121, 393, 859, 1309, 2997, 3197]),
    (13, 575, &[1, 1, 5, 13, 3, 43, 65, 33, 301, 229, 639, 131, 4331]),
    (13, 577, &[1, 3, 5, 13, 11, 53, 79, 45, 259, 113, 393, 3961, 4461]),
    (13, 589, &[1, 3, 3, 5, 11, 37, 5, 37, 233, 631, 679, 989, 3605]),
    (13, 590, &[1, 3, 3, 7, 27, 45, 39, 165, 371, 365, 1889, 1295, 2741]),
    (13, 602, &[1, 3, 1, 3, 23, 3, 49, 35, 237, 889, 1699, 1009, 5485]),
    (13, 607, &[1, 3, 5, 7, 11, 3, 11, 165, 121, 361, 1913, 1067, 1189]),
    (13, 608, &[1, 3, 5, 15, 9, 11, 31, 107, 425, 291, 849, 3165, 7135]),
    (13, 611, &[1, 1, 7, 7, 1, 55, 29, 129, 289, 735, 363, 2901, 8113]),
    (13, 613, &[1, 1, 7, 7, 3, 43, 53, 127, 501, 607, 1529, 301, 7449]),
    (13, 625, &[1, 1, 1, 7, 5, 33, 119, 143, 425, 361, 763, 2601, 5571]),
    (13, 644, &[1, 1, 7, 7, 11, 29, 49, 195, 243, 1005, 1411, 1751, 4993]),
    (13, 651, &[1, 3, 3, 13, 11, 25, 77, 155, 101, 137, 1769, 2065, 2575]),
    (13, 654, &[1, 1, 7, 11, 15, 5, 79, 133, 451, 947, 3, 615, 6039]),
    (13, 656, &[1, 1, 1, 1, 29, 53, 85, 187, 13, 427, 1989, 925, 2129]),
    (13, 662, &[1, 3, 7, 3, 3, 39, 101, 167, 483, 689, 885, 995, 6805]),
    (13, 668, &[1, 1, 7, 11, 5, 53, 25, 81, 337, 799, 845, 2005, 2801]),
    (13, 681, &[1, 3, 7, 1, 25, 11, 113, 13, 365, 75, 1159, 2515, 3899]),
    (13, 682, &[1, 3, 3, 11, 19, 61, 69, 113, 411, 561, 745, 3941, 243]),
    (13, 689, &[1, 1, 3, 15, 11, 35, 13, 179, 331, 783, 1965, 2167, 335]),
    (13, 696, &[1, 1, 7, 11, 5, 57, 45, 215, 3, 91, 557, 3969, 6207]),
    (13, 699, &[1, 1, 3, 11, 25, 1, 117, 77, 99, 473, 1115, 1023, 3093]),
    (13, 707, &[1, 3, 3, 9, 17, 61, 7, 41, 457, 743, 1657, 769, 1793]),
    (13, 709, &[1, 3, 5, 9, 19, 33, 73, 161, 5, 867, 829, 3147, 2767]),
    (13, 714, &[1, 3, 5, 15, 25, 63, 3, 71, 175, 909, 785, 2583, 1435]),
    (13, 716, &[1, 1, 1, 1, 1, 29, 75, 241, 239, 85, 1657, 3361, 5849]),
    (13, 719, &[1, 3, 1, 1, 13, 45, 93, 17, 393, 717, 459, 1877, 6155]),
    (13, 727, &[1, 3, 1, 13, 29, 13, 33, 93, 55, 551, 1283, 195, 7183]),
    (13, 734, &[1, 3, 1, 7, 7, 5, 107, 21, 437, 285, 309, 529, 6905]),
    (13, 738, &[1, 3, 5, 13, 23, 55, 9, 169, 397, 899, 1223, 2059, 845]),
    (13, 743, &[1, 3, 1, 7, 1, 61, 1, 105, 297, 643, 1647, 1371, 5515]),
    (13, 747, &[1, 1, 5, 7, 23, 21, 121, 225, 137, 903, 1851, 889, 3343]),
    (13, 757, &[1, 1, 1, 1, 21, 41, 41, 245, 29, 355, 897, 3573, 239]),
    (13, 769, &[1, 3, 7, 11, 9, 29, 21, 193, 389, 603, 305, 2369, 5339]),
    (13, 770, &[1, 3, 7, 3, 21, 29, 93, 199, 149, 417, 1373, 3857, 1085]),
    (13, 776, &[1, 1, 5, 1, 3, 49, 81, 249, 271, 857, 711, 3305, 7583]),
    (13, 790, &[1, 1, 5, 15, 3, 39, 35, 195, 441, 691, 673, 1821, 3335]),
    (13, 799, &[1, 3, 5, 11, 5, 59, 65, 5, 379, 745, 233, 2555, 2193]),
    (13, 805, &[1, 3, 5, 5, 31, 51, 91, 253, 485, 739, 527, 3425, 4439]),
    (13, 809, &[1, 3, 5, 7, 3, 43, 85, 253, 85, 331, 951, 1365, 5213]),
    (13, 812, &[1, 1, 1, 3, 13, 5, 13, 145, 465, 277, 717, 507, 3019]),
    (13, 820, &[1, 3, 3, 5, 21, 51, 59, 31, 159, 757, 671, 853, 5915]),
    (13, 827, &[1, 1, 7, 13, 23, 33, 35, 185, 341, 883, 1293, 2729, 3385]),
    (13, 829, &[1, 1, 3, 5, 7, 39, 117, 227, 473, 605, 1043, 2875, 7899]),
    (13, 835, &[1, 1, 3, 15, 25, 53, 107, 247, 173, 1013, 51, 3701, 6831]),
    (13, 841, &[1, 3, 7, 7, 11, 27, 35, 183, 155, 507, 693, 2301, 533]),
    (13, 844, &[1, 3, 5, 13, 13, 47, 127, 99, 195, 357, 1117, 3479, 6859]),
    (13, 856, &[1, 1, 5, 3, 25, 61, 99, 45, 307, 423, 1883, 3083, 7845]),
    (13, 859, &[1, 3, 5, 5, 5, 17, 61, 229, 429, 845, 1399, 3453, 2997]),
    (13, 862, &[1, 3, 7, 7, 5, 61, 7, 193, 97, 983, 1433, 1405, 6651]),
    (13, 865, &[1, 1, 7, 15, 21, 23, 3, 219, 301, 211, 1695, 1417, 2807]),
    (13, 885, &[1, 1, 5, 1, 21, 55, 41, 111, 89, 485, 347, 985, 7229]),
    (13, 890, &[1, 3, 1, 9, 1, 11, 59, 125, 417, 159, 555, 3645, 7563]),
    (13, 905, &[1, 1, 3, 15, 13, 13, 99, 161, 15, 815, 1831, 2225, 99]),
    (13, 916, &[1, 1, 7, 13, 9, 13, 103, 73, 117, 229, 55, 2805, 4601]),
    (13, 925, &[1, 3, 1, 9, 11, 9, 97, 207, 141, 823, 457, 2041, 5195]),
    (13, 935, &[1, 3, 1, 5, 27, 41, 79, 129, 421, 917, 1963, 3557, 7217]),
    (13, 939, &[1, 3, 7, 7, 21, 29, 65, 55, 213, 699, 1561, 3259, 1435]),
    (13, 942, &[1, 3, 7, 3, 23, 11, 47, 197, 251, 935, 1441, 933, 6321]),
    (13, 949, &[1, 3, 3, 1, 7, 9, 111, 29, 249, 87, 265, 2643, 5779]),
    (13, 953, &[1, 3, 1, 1, 1, 41, 29, 199, 215, 207, 1915, 513, 5421]),
    (13, 956, &[1, 1, 1, 7, 23, 57, 95, 45, 327, 213, 1605, 3641, 4969]),
    (13, 961, &[1, 1, 3, 5, 13, 39, 51, 237, 335, 427, 1317, 3503, 5107]),
    (13, 968, &[1, 3, 1, 11, 1, 1, 95, 37, 387, 649, 1329, 4001, 4831]),
    (13, 976, &[1, 1, 3, 3, 25, 59, 43, 89, 373, 35, 1545, 1329, 3535]),
    (13, 988, &[1, 1, 5, 9, 11, 61, 53, 93, 213, 679, 607, 2561, 511]),
    (13, 995, &[1, 1, 7, 1, 21, 13, 69, 157, 71, 287, 965, 203, 6009]),
    (13, 997, &[1, 3, 5, 11, 29, 29, 61, 89, 511, 275, 1045, 3107, 6241]),
    (13, 1007, &[1, 3, 5, 1, 25, 61, 5, 85, 433, 873, 951, 269, 7747]),
    (13, 1015, &[1, 1, 3, 13, 5, 9, 21, 243, 495, 227, 1603, 2887, 2469]),
    (13, 1016, &[1, 3, 1, 9, 5, 43, 19, 69, 355, 281, 1137, 2551, 1385]),
    (13, 1027, &[1, 1, 7, 9, 9, 59, 67, 51, 457, 87, 539, 39, 939]),
    (13, 1036, &[1, 1, 5, 7, 3, 29, 49, 227, 323, 53, 1735, 3599, 1521]),
    (13, 1039, &[1, 1, 3, 11, 27, 11, 63, 209, 263, 741, 1143, 2857, 3199]),
    (13, 1041, &[1, 3, 5, 3, 29, 29, 91, 191, 33, 131, 221, 3953, 5589]),
    (13, 1048, &[1, 1, 5, 15, 7, 5, 113, 1, 331, 1011, 1263, 1309, 5067]),
    (13, 1053, &[1, 3, 1, 1, 1, 15, 121, 119, 257, 639, 1747, 2539, 651]),
    (13, 1054, &[1, 1, 3, 5, 17, 27, 63, 121, 317, 141, 187, 2907, 1877]),
    (13, 1058, &[1, 3, 7, 15, 19, 23, 51, 231, 459, 669, 1397, 3859, 3591]),
    (13, 1075, &[1, 1, 5, 5, 21, 57, 11, 163, 225, 151, 1277, 755, 5029]),
    (13, 1082, &[1, 1, 3, 7, 3, 33, 15, 19, 215, 25, 123, 1365, 4003]),
    (13, 1090, &[1, 1, 1, 5, 31, 29, 39, 227, 83, 369, 1113, 2985, 6303]),
    (13, 1109, &[1, 3, 1, 9, 9, 55, 115, 249, 349, 695, 1933, 597, 4125]),
    (13, 1110, &[1, 3, 7, 7, 13, 5, 119, 197, 17, 3, 949, 1205, 4843]),
    (13, 1119, &[1, 3, 3, 9, 31, 33, 101, 183, 457, 157, 1951, 3803, 6127]),
    (13, 1126, &[1, 3, 5, 15, 13, 1, 47, 77, 73, 549, 1953, 2837, 3779]),
    (13, 1130, &[1, 3, 3, 15, 23, 13, 39, 23, 429, 203, 1119, 3937, 3811]),
    (13, 1135, &[1, 3, 5, 15, 19, 51, 57, 87, 243, 941, 1297, 3187, 7933]),
    (13, 1137, &[1, 1, 3, 11, 7, 33, 29, 123, 263, 635, 749, 2283, 7779]),
    (13, 1140, &[1, 3, 5, 15, 9, 59, 107, 97, 3, 393, 839, 2439, 5129]),
    (13, 1149, &[1, 3, 3, 15, 15, 21, 79, 41, 229, 647, 1719, 557, 7313]),
    (13, 1156, &[1, 3, 1, 7, 29, 41, 33, 177, 113, 411, 1273, 1057, 3415]),
    (13, 1159, &[1, 1, 7, 9, 23, 23, 13, 79, 275, 695, 1873, 591, 5631]),
    (13, 1160, &[1, 1, 7, 13, 21, 9, 71, 255, 419, 589, 1343, 273, 7497]),
    (13, 1165, &[1, 1, 1, 1, 7, 27, 85, 231, 73, 171, 241, 3135, 2281]),
    (13, 1173, &[1, 1, 7, 1, 1, 53, 5, 87, 243, 675, 963, 7, 3365]),
    (13, 1178, &[1, 1, 3, 15, 7, 45, 117, 253, 365, 939, 1563, 1195, 2961]),
    (13, 1183, &[1, 3, 3, 7, 15, 61, 101, 215, 471, 91, 147, 3081, 4913]),
    (13, 1184, &[1, 1, 7, 1, 5, 59, 75, 123, 479, 325, 967, 3269, 507]),
    (13, 1189, &[1, 3, 1, 15, 7, 13, 89, 47, 265, 215, 415, 1627, 3665]),
    (13, 1194, &[1, 3, 7, 11, 17, 37, 93, 43, 97, 675, 1783, 2105, 3739]),
    (13, 1211, &[1, 3, 7, 15, 31, 41, 7, 143, 159, 155, 1161, 2037, 1087]),
    (13, 1214, &[1, 3, 7, 7, 1, 63, 27, 187, 177, 671, 927, 3583, 4221]),
    (13, 1216, &[1, 3, 5, 5, 17, 35, 29, 165, 63, 475, 3, 803, 1501]),
    (13, 1225, &[1, 3, 7, 3, 29, 53, 79, 155, 143, 105, 1361, 3365, 2801]),
    (13, 1231, &[1, 3, 3, 9, 27, 29, 109, 51, 475, 169, 103, 2749, 1629]),
    (13, 1239, &[1, 3, 5, 13, 3, 1, 3, 235, 401, 755, 207, 1941, 5229]),
    (13, 1243, &[1, 3, 3, 5, 13, 63, 59, 1, 403, 1015, 1849, 1747, 2011]),
    (13, 1246, &[1, 3, 3, 1, 27, 19, 113, 255, 175, 381, 811, 707, 1997]),
    (13, 1249, &[1, 3, 1, 7, 9, 41, 65, 105, 489, 99, 1727, 855, 1889]),
    (13, 1259, &[1, 3, 1, 9, 9, 15, 57, 207, 47, 293, 1531, 2305, 5501]),
    (13, 1273, &[1, 3, 1, 1, 5, 7, 121, 31, 283, 141, 3, 515, 2313]),
    (13, 1274, &[1, 1, 3, 1, 17, 57, 57, 173, 327, 445, 1397, 647, 925]),
    (13, 1281, &[1, 3, 1, 15, 31, 33, 31, 101, 51, 797, 1443, 1659, 4243]),
    (13, 1287, &[1, 1, 5, 15, 3, 11, 99, 49, 219, 707, 495, 1465, 895]),
    (13, 1294, &[1, 3, 1, 5, 17, 13, 37, 221, 349, 131, 527, 3475, 7435]),
    (13, 1296, &[1, 3, 7, 7, 1, 15, 17, 253, 81, 237, 1067, 3167, 6745]),
    (13, 1305, &[1, 1, 3, 15, 15, 7, 77, 209, 301, 305, 1431, 479, 565]),
    (13, 1306, &[1, 1, 5, 1, 9, 11, 47, 225, 187, 671, 1625, 3425, 2119]),
    (13, 1318, &[1, 3, 5, 3, 11, 25, 87, 237, 431, 629, 1259, 3703, 113]),
    (13, 1332, &[1, 1, 1, 11, 5, 49, 85, 111, 127, 421, 1153, 1681, 5095]),
    (13, 1335, &[1, 1, 7, 9, 15, 27, 85, 67, 359, 781, 681, 1893, 7475]),
    (13, 1336, &[1, 3, 5, 9, 31, 39, 117, 103, 395, 691, 1385, 3421, 773]),
    (13, 1341, &[1, 1, 7, 15, 9, 43, 31, 115, 185, 563, 1573, 1401, 1647]),
    (13, 1342, &[1, 3, 1, 3, 9, 59, 21, 119, 91, 31, 311, 1017, 4227]),
    (13, 1362, &[1, 3, 7, 9, 7, 33, 117, 217, 465, 67, 903, 995, 4631]),
    (13, 1364, &[1, 3, 3, 1, 13, 27, 57, 205, 203, 237, 1373, 231, 2451]),
    (13, 1368, &[1, 1, 3, 13, 29, 21, 65, 109, 99, 335, 643, 3191, 6489]),
    (13, 1378, &[1, 1, 7, 9, 25, 41, 45, 209, 439, 675, 1909, 2843, 6477]),
    (13, 1387, &[1, 1, 7, 3, 11, 11, 47, 45, 325, 981, 1155, 3679, 6835]),
    (13, 1389, &[1, 1, 3, 11, 19, 11, 9, 57, 13, 769, 1535, 3853, 3689]),
    (13, 1397, &[1, 1, 7, 5, 19, 57, 63, 161, 287, 497, 1433, 2177, 3069]),
    (13, 1401, &[1, 3, 7, 15, 7, 25, 1, 239, 237, 875, 427, 3565, 385]),
    (13, 1408, &[1, 3, 5, 15, 29, 7, 97, 101, 181, 241, 1651, 689, 6445]),
    (13, 1418, &[1, 1, 3, 7, 19, 25, 87, 151, 167, 113, 1129, 483, 3431]),
    (13, 1425, &[1, 3, 7, 5, 27, 33, 81, 29, 383, 275, 177, 885, 5591]),
    (13, 1426, &[1, 1, 1, 3, 27, 17, 79, 89, 145, 809, 1815, 1311, 7871]),
    (13, 1431, &[1, 1, 1, 7, 11, 61, 53, 203, 495, 725, 1247, 1461, 917]),
    (13, 1435, &[1, 1, 3, 13, 7, 37, 19, 197, 445, 135, 661, 2861, 2143]),
    (13, 1441, &[1, 1, 5, 11, 27, 27, 77, 17, 415, 523, 1321, 2339, 7767]),
    (13, 1444, &[1, 1, 5, 13, 5, 31, 27, 7, 239, 885, 17, 747, 407]),
    (13, 1462, &[1, 3, 7, 9, 15, 45, 13, 225, 19, 3, 1763, 377, 7801]),
    (13, 1471, &[1, 1, 3, 15, 11, 21, 43, 251, 493, 713, 1541, 3609, 2211]),
    (13, 1474, &[1, 1, 3, 1, 13, 15, 119, 29, 155, 777, 427, 3619, 1123]),
    (13, 1483, &[1, 3, 3, 15, 13, 57, 21, 65, 101, 807, 1035, 873, 91]),
    (13, 1485, &[1, 3, 5, 1, 27, 17, 43, 13, 135, 433, 901, 2353, 7499]),
    (13, 1494, &[1, 3, 5, 1, 13, 43, 121, 55, 55, 913, 741, 437, 6251]),
    (13, 1497, &[1, 1, 1, 3, 19, 59, 109, 17, 159, 951, 751, 2419, 2987]),
    (13, 1516, &[1, 3, 1, 7, 13, 35, 53, 239, 219, 335, 137, 337, 5203]),
    (13, 1522, &[1, 3, 7, 11, 7, 47, 79, 123, 111, 275, 371, 635, 2375]),
    (13, 1534, &[1, 1, 1, 9, 3, 47, 91, 125, 505, 237, 1757, 3373, 6921]),
    (13, 1543, &[1, 3, 7, 3, 3, 23, 125, 169, 149, 31, 1225, 2589, 3443]),
    (13, 1552, &[1, 1, 1, 3, 27, 29, 53, 235, 171, 899, 1995, 361, 1783]),
    (13, 1557, &[1, 3, 1, 9, 7, 1, 57, 177, 315, 899, 189, 1653, 1437]),
    (13, 1558, &[1, 3, 7, 7, 13, 25, 43, 199, 481, 1007, 723, 1711, 271]),
    (13, 1567, &[1, 3, 1, 11, 27, 45, 95, 101, 223, 227, 1757, 1539, 4411]),
    (13, 1568, &[1, 1, 7, 1, 21, 11, 71, 109, 41, 705, 1565, 3287, 2675]),
    (13, 1574, &[1, 3, 7, 1, 31, 57, 5, 19, 41, 589, 1311, 3829, 9]),
    (13, 1592, &[1, 1, 5, 11, 5, 39, 97, 209, 459, 467, 759, 455, 1985]),
    (13, 1605, &[1, 1, 1, 9, 29, 47, 91, 209, 299, 597, 445, 1359, 2913]),
    (13, 1606, &[1, 3, 3, 7, 7, 43, 125, 47, 85, 533, 1077, 1779, 4751]),
    (13, 1610, &[1, 3, 7, 3, 5, 49, 11, 177, 335, 437, 1369, 3777, 7305]),
    (13, 1617, &[1, 1, 5, 15, 17, 1, 47, 209, 179, 99, 1847, 2065, 1001]),
    (13, 1623, &[1, 1, 3, 3, 11, 1, 19, 153, 139, 3, 737, 3155, 6785]),
    (13, 1630, &[1, 3, 1, 1, 19, 31, 61, 5, 87, 349, 1271, 645, 1685]),
    (13, 1634, &[1, 1, 7, 9, 7, 23, 69, 87, 219, 349, 1147, 1653, 6091]),
    (13, 1640, &[1, 3, 7, 9, 3, 17, 59, 217, 443, 955, 59, 1229, 6847]),
    (13, 1643, &[1, 1, 7, 5, 25, 39, 43, 235, 253, 839, 1065, 825, 2339]),
    (13, 1648, &[1, 3, 5, 9, 9, 21, 119, 27, 321, 633, 771, 1161, 3721]),
    (13, 1651, &[1, 1, 7, 7, 25, 37, 127, 149, 501, 627, 1989, 3003, 13]),
    (13, 1653, &[1, 3, 3, 1, 3, 39, 97, 201, 159, 679, 797, 823, 63]),
    (13, 1670, &[1, 3, 5, 1, 15, 39, 37, 213, 3, 753, 1097, 2249, 4015]),
    (13, 1676, &[1, 3, 5, 9, 31, 45, 67, 75, 125, 941, 2029, 459, 6303]),
    (13, 1684, &[1, 1, 5, 1, 19, 57, 93, 141, 245, 213, 1429, 1617, 199]),
    (13, 1687, &[1, 1, 7, 9, 7, 5, 51, 13, 79, 185, 721, 3581, 6861]),
    (13, 1691, &[1, 1, 3, 7, 7, 55, 27, 115, 7, 389, 197, 139, 3453]),
    (13, 1693, &[1, 3, 1, 5, 29, 11, 31, 167, 373, 21, 645, 1441, 3613]),
    (13, 1698, &[1, 3, 7, 5, 7, 9, 107, 93, 461, 863, 1581, 3033, 5969]),
    (13, 1709, &[1, 3, 3, 11, 29, 35, 117, 137, 129, 727, 543, 3405, 7527]),
    (13, 1715, &[1, 1, 1, 3, 19, 57, 125, 183, 97, 197, 37, 2683, 1139]),
    (13, 1722, &[1, 3, 1, 11, 21, 23, 113, 123, 219, 867, 937, 2359, 5937]),
    (13, 1732, &[1, 3, 5, 5, 23, 1, 95, 117, 241, 615, 1109, 4013, 2645]),
    (13, 1735, &[1, 1, 3, 5, 5, 27, 41, 241, 267, 113, 459, 4019, 1943]),
    (13, 1747, &[1, 3, 1, 11, 15, 25, 99, 221, 243, 669, 1917, 2011, 1137]),
    (13, 1749, &[1, 1, 5, 9, 29, 9, 47, 227, 383, 913, 1909, 2519, 2325]),
    (13, 1754, &[1, 1, 7, 5, 25, 63, 29, 33, 323, 863, 1767, 287, 5065]),
    (13, 1777, &[1, 1, 1, 1, 25, 1, 125, 187, 35, 321, 1161, 793, 1015]),
    (13, 1784, &[1, 3, 3, 1, 11, 5, 87, 23, 225, 567, 1097, 2041, 1313]),
    (13, 1790, &[1, 3, 1, 5, 31, 45, 115, 121, 261, 231, 1347, 3449, 6905]),
    (13, 1795, &[1, 1, 1, 1, 27, 31, 59, 199, 89, 1, 1207, 2605, 6387]),
    (13, 1801, &[1, 1, 3, 1, 11, 29, 121, 161, 357, 183, 1525, 1467, 6943]),
    (13, 1802, &[1, 3, 7, 7, 27, 35, 77, 17, 347, 807, 591, 2819, 1531]),
    (13, 1812, &[1, 3, 5, 15, 25, 5, 65, 79, 485, 659, 1693, 3285, 2345]),
    (13, 1828, &[1, 1, 1, 1, 29, 41, 119, 239, 397, 945, 1459, 1517, 6365]),
    (13, 1831, &[1, 1, 1, 11, 11, 15, 79, 229, 399, 895, 1825, 771, 2353]),
    (13, 1837, &[1, 1, 7, 13, 17, 17, 99, 37, 493, 373, 1161, 2303, 6877]),
    (13, 1838, &[1, 1, 3, 11, 31, 33, 81, 143, 85, 381, 1845, 3385, 4983]),
    (13, 1840, &[1, 3, 3, 11, 13, 39, 127, 101, 185, 237, 957, 435, 809]),
    (13, 1845, &[1, 1, 3, 1, 7, 25, 1, 211, 275, 771, 463, 1641, 2879]),
    (13, 1863, &[1, 1, 1, 11, 5, 29, 65, 69, 107, 777, 925, 121, 3895]),
    (13, 1864, &[1, 3, 5, 9, 13, 21, 25, 193, 229, 755, 1621, 3215, 1675]),
    (13, 1867, &[1, 3, 7, 13, 21, 21, 21, 45, 237, 755, 1591, 2525, 7577]),
    (13, 1870, &[1, 3, 3, 9, 9, 3, 109, 109, 331, 67, 1871, 1849, 2823]),
    (13, 1877, &[1, 1, 5, 13, 1, 5, 21, 117, 431, 889, 1989, 2909, 1235]),
    (13, 1881, &[1, 3, 5, 15, 7, 9, 45, 25, 355, 117, 1889, 103, 1517]),
    (13, 1884, &[1, 3, 7, 13, 11, 11, 11, 83, 239, 667, 677, 2631, 6765]),
    (13, 1903, &[1, 1, 7, 3, 15, 45, 29, 139, 197, 475, 1841, 1093, 5699]),
    (13, 1917, &[1, 1, 5, 9, 9, 53, 85, 155, 29, 285, 1049, 457, 379]),
    (13, 1918, &[1, 1, 3, 9, 29, 63, 97, 221, 431, 853, 1609, 2103, 4407]),
    (13, 1922, &[1, 3, 5, 1, 21, 55, 9, 117, 305, 585, 399, 2765, 2789]),
    (13, 1924, &[1, 3, 1, 1, 19, 33, 121, 19, 73, 675, 669, 55, 6813]),
    (13, 1928, &[1, 1, 1, 11, 11, 51, 109, 127, 75, 985, 1983, 423, 2843]),
    (13, 1931, &[1, 1, 1, 11, 7, 63, 21, 87, 151, 579, 1011, 97, 3937]),
    (13, 1951, &[1, 1, 5, 15, 1, 25, 51, 139, 301, 793, 781, 3441, 3629]),
    (13, 1952, &[1, 1, 1, 9, 3, 37, 121, 191, 469, 575, 35, 79, 8035]),
    (13, 1957, &[1, 3, 7, 7, 19, 59, 43, 203, 253, 329, 1723, 2697, 6853]),
    (13, 1958, &[1, 3, 5, 9, 13, 29, 25, 189, 493, 89, 1575, 3265, 6875]),
    (13, 1964, &[1, 3, 5, 11, 7, 33, 1, 159, 163, 971, 1589, 2359, 7787]),
    (13, 1967, &[1, 3, 3, 3, 29, 27, 123, 231, 7, 753, 351, 2559, 7641]),
    (13, 1970, &[1, 1, 5, 1, 27, 57, 67, 163, 383, 603, 331, 1803, 4375]),
    (13, 1972, &[1, 3, 7, 1, 9, 49, 65, 229, 105, 405, 1787, 3955, 5867]),
    (13, 1994, &[1, 1, 7, 1, 9, 61, 85, 239, 273, 967, 1287, 3523, 289]),
    (13, 2002, &[1, 3, 7, 7, 27, 21, 77, 245, 237, 507, 357, 2885, 8035]),
    (13, 2007, &[1, 1, 5, 13, 13, 39, 19, 245, 393, 1021, 1303, 2023, 393]),
    (13, 2008, &[1, 1, 5, 11, 13, 37, 49, 139, 149, 911, 1999, 2017, 1327]),
    (13, 2023, &[1, 1, 7, 7, 29, 49, 119, 111, 23, 705, 1261, 3535, 59]),
    (13, 2030, &[1, 3, 3, 9, 17, 59, 69, 187, 241, 705, 1279, 1073, 5943]),
    (13, 2035, &[1, 3, 5, 9, 25, 33, 95, 59, 191, 821, 123, 3113, 6465]),
    (13, 2038, &[1, 3, 7, 1, 7, 47, 25, 195, 61, 745, 967, 603, 1581]),
    (13, 2042, &[1, 3, 3, 7, 29, 13, 53, 153, 403, 239, 1425, 2817, 7503]),
    (13, 2047, &[1, 1, 5, 1, 27, 19, 121, 251, 207, 435, 949, 401, 769]),
    (13, 2051, &[1, 1, 7, 7, 29, 33, 17, 151, 415, 809, 457, 3977, 7031]),
    (13, 2058, &[1, 1, 3, 13, 7, 31, 53, 219, 243, 151, 1575, 343, 5479]),
    (13, 2060, &[1, 1, 3, 5, 13, 5, 25, 193, 243, 1013, 1917, 3641, 1787]),
    (13, 2071, &[1, 3, 5, 1, 13, 15, 3, 47, 137, 619, 87, 1925, 701]),
    (13, 2084, &[1, 3, 3, 9, 31, 9, 83, 47, 73, 73, 495, 927, 4559]),
    (13, 2087, &[1, 3, 1, 5, 23, 41, 39, 147, 501, 395, 307, 3747, 1223]),
    (13, 2099, &[1, 3, 3, 15, 9, 39, 119, 19, 87, 343, 1297, 33, 3535]),
    (13, 2108, &[1, 1, 7, 15, 23, 29, 125, 31, 349, 971, 95, 2957, 7715]),
    (13, 2111, &[1, 1, 3, 9, 27, 11, 59, 119, 63, 503, 699, 2769, 1679]),
    (13, 2120, &[1, 1, 3, 11, 9, 9, 107, 31, 15, 385, 47, 2591, 837]),
    (13, 2128, &[1, 3, 1, 13, 31, 51, 75, 251, 315, 7, 1567, 2047, 7097]),
    (13, 2138, &[1, 1, 1, 7, 13, 27, 115, 227, 157, 501, 679, 1637, 3895]),
    (13, 2143, &[1, 3, 3, 3, 15, 1, 21, 23, 477, 897, 1443, 2065, 305]),
    (13, 2144, &[1, 1, 7, 5, 27, 27, 35, 213, 307, 475, 1769, 1503, 753]),
    (13, 2153, &[1, 3, 3, 3, 21, 47, 5, 11, 131, 643, 1329, 1489, 2673]),
    (13, 2156, &[1, 1, 1, 7, 1, 63, 119, 159, 375, 899, 77, 241, 6121]),
    (13, 2162, &[1, 3, 7, 11, 27, 21, 7, 239, 245, 357, 557, 3893, 595]),
    (13, 2167, &[1, 3, 1, 5, 13, 15, 43, 147, 167, 775, 59, 3187, 5011]),
    (13, 2178, &[1, 1, 3, 5, 31, 33, 99, 255, 353, 995, 1943, 1171, 4399]),
    (13, 2183, &[1, 3, 7, 15, 21, 29, 121, 71, 141, 73, 1479, 3971, 8123]),
    (13, 2202, &[1, 3, 7, 1, 17, 63, 63, 255, 303, 221, 1881, 3901, 3473]),
    (13, 2211, &[1, 1, 5, 5, 11, 29, 63, 245, 313, 861, 155, 4053, 1337]),
    (13, 2214, &[1, 1, 3, 9, 5, 53, 15, 5, 41, 3, 1211, 143, 7989]),
    (13, 2223, &[1, 3, 5, 5, 9, 39, 99, 73, 99, 997, 161, 21, 6739]),
    (13, 2225, &[1, 3, 1, 15, 3, 13, 57, 125, 361, 745, 135, 1547, 579]),
    (13, 2232, &[1, 3, 3, 9, 9, 31, 75, 23, 19, 211, 687, 727, 2587]),
    (13, 2237, &[1, 1, 1, 1, 17, 47, 91, 213, 161, 1023, 1043, 1613, 6791]),
    (13, 2257, &[1, 3, 5, 11, 9, 45, 105, 113, 487, 383, 581, 2699, 4493]),
    (13, 2260, &[1, 1, 1, 11, 23, 49, 73, 81, 227, 137, 1713, 2003, 4027]),
    (13, 2267, &[1, 3, 3, 5, 11, 39, 5, 191, 511, 125, 1411, 3145, 7785]),
    (13, 2274, &[1, 3, 7, 1, 29, 13, 11, 41, 205, 217, 221, 2151, 4399]),
    (13, 2276, &[1, 1, 7, 3, 15, 41, 51, 157, 265, 97, 909, 3795, 7881]),
    (13, 2285, &[1, 1, 3, 15, 21, 57, 13, 225, 279, 813, 1349, 825, 1341]),
    (13, 2288, &[1, 3, 3, 7, 9, 23, 81, 187, 355, 361, 1627, 1805, 2817]),
    (13, 2293, &[1, 1, 7, 13, 7, 15, 51, 17, 53, 603, 1037, 159, 5209]),
    (13, 2294, &[1, 1, 3, 9, 9, 53, 21, 141, 285, 973, 801, 3571, 6387]),
    (13, 2297, &[1, 3, 1, 5, 21, 9, 69, 123, 205, 305, 1795, 1017, 3775]),
    (13, 2303, &[1, 3, 1, 1, 25, 17, 39, 217, 105, 859, 677, 2019, 2267]),
    (13, 2308, &[1, 1, 5, 15, 9, 7, 89, 75, 307, 293, 731, 1521, 719]),
    (13, 2311, &[1, 1, 1, 11, 31, 9, 65, 33, 335, 745, 757, 2055, 8159]),
    (13, 2318, &[1, 1, 7, 9, 1, 55, 23, 9, 371, 945, 1499, 853, 1233]),
    (13, 2323, &[1, 3, 3, 5, 17, 5, 89, 205, 249, 451, 1415, 1151, 4371]),
    (13, 2332, &[1, 3, 7, 9, 5, 7, 127, 233, 393, 427, 1249, 699, 7717]),
    (13, 2341, &[1, 3, 3, 13, 21, 33, 81, 45, 351, 945, 823, 469, 7061]),
    (13, 2345, &[1, 1, 1, 9, 27, 59, 111, 181, 483, 945, 1689, 3805, 4355]),
    (13, 2348, &[1, 1, 5, 5, 17, 61, 97, 193, 493, 877, 411, 1253, 6885]),
    (13, 2354, &[1, 3, 3, 9, 15, 39, 31, 177, 55, 343, 437, 2919, 6285]),
    (13, 2368, &[1, 1, 7, 5, 11, 47, 125, 207, 39, 269, 1365, 1783, 543]),
    (13, 2377, &[1, 3, 5, 15, 7, 23, 35, 191, 165, 861, 1721, 2683, 6915]),
    (13, 2380, &[1, 3, 7, 3, 9, 57, 45, 129, 23, 451, 435, 275, 5175]),
    (13, 2383, &[1, 1, 5, 11, 11, 39, 127, 191, 435, 315, 1705, 357, 5791]),
    (13, 2388, &[1, 1, 7, 9, 27, 23, 11, 11, 149, 735, 259, 873, 7499]),
    (13, 2395, &[1, 3, 7, 3, 1, 49, 89, 237, 483, 669, 957, 2755, 6703]),
    (13, 2397, &[1, 1, 1, 15, 5, 25, 5, 225, 233, 799, 1129, 3527, 5343]),
    (13, 2401, &[1, 3, 3, 1, 23, 61, 63, 73, 141, 965, 897, 2037, 6497]),
    (13, 2411, &[1, 3, 3, 3, 1, 63, 93, 85, 211, 283, 1139, 3497, 2063]),
    (13, 2413, &[1, 1, 7, 1, 29, 37, 67, 71, 461, 813, 1245, 613, 7319]),
    (13, 2419, &[1, 1, 3, 11, 3, 37, 71, 157, 275, 1001, 657, 4007, 4007]),
    (13, 2435, &[1, 3, 5, 5, 5, 13, 105, 139, 431, 547, 535, 3095, 6105]),
    (13, 2442, &[1, 1, 5, 7, 13, 9, 61, 7, 205, 641, 1879, 2997, 5091]),
    (13, 2455, &[1, 3, 7, 13, 15, 55, 73, 121, 353, 455, 1997, 3371, 1553]),
    (13, 2472, &[1, 3, 1, 11, 19, 35, 103, 35, 193, 463, 833, 1955, 5687]),
    (13, 2478, &[1, 1, 5, 7, 21, 1, 27, 73, 257, 397, 797, 2265, 2491]),
    (13, 2490, &[1, 3, 1, 7, 23, 31, 5, 11, 471, 967, 367, 2349, 117]),
    (13, 2507, &[1, 3, 1, 9, 29, 7, 59, 251, 451, 939, 885, 435, 485]),
    (13, 2509, &[1, 3, 3, 1, 11, 63, 125, 85, 87, 751, 2025, 3383, 5159]),
    (13, 2517, &[1, 1, 3, 7, 17, 61, 5, 119, 13, 689, 873, 3957, 4119]),
    (13, 2524, &[1, 1, 5, 13, 13, 5, 55, 225, 65, 445, 1241, 3173, 481]),
    (13, 2528, &[1, 3, 7, 7, 25, 45, 59, 133, 93, 713, 785, 3931, 3215]),
    (13, 2531, &[1, 1, 5, 3, 29, 61, 79, 225, 175, 461, 663, 1235, 2491]),
    (13, 2538, &[1, 1, 1, 5, 13, 53, 43, 137, 395, 843, 1299, 629, 3917]),
    (13, 2545, &[1, 3, 5, 13, 13, 51, 127, 213, 131, 411, 1075, 879, 3309]),
    (13, 2546, &[1, 3, 7, 7, 1, 45, 111, 219, 45, 757, 1007, 719, 7399]),
    (13, 2555, &[1, 1, 1, 9, 11, 9, 101, 47, 347, 459, 1951, 759, 3683]),
    (13, 2557, &[1, 1, 1, 9, 31, 3, 103, 75, 469, 487, 229, 559, 4291]),
    (13, 2564, &[1, 3, 7, 9, 31, 43, 99, 171, 135, 179, 1263, 1653, 6647]),
    (13, 2573, &[1, 1, 3, 1, 27, 33, 5, 231, 37, 811, 467, 2837, 725]),
    (13, 2579, &[1, 1, 5, 1, 11, 21, 39, 129, 67, 875, 1625, 1975, 39]),
    (13, 2592, &[1, 3, 5, 9, 27, 45, 111, 91, 503, 737, 1361, 2099, 3737]),
    (13, 2598, &[1, 3, 3, 1, 19, 53, 29, 9, 495, 153, 1619, 3017, 6505]),
    (13, 2607, &[1, 3, 5, 5, 19, 7, 79, 95, 299, 317, 1417, 397, 8049]),
    (13, 2612, &[1, 3, 1, 13, 7, 29, 23, 11, 271, 359, 1125, 241, 2737]),
    (13, 2619, &[1, 1, 7, 5, 15, 57, 75, 203, 131, 179, 1847, 827, 6807]),
    (13, 2621, &[1, 3, 5, 7, 13, 53, 27, 47, 375, 491, 639, 1467, 7343]),
    (13, 2627, &[1, 3, 5, 7, 25, 27, 93, 145, 397, 269, 611, 2553, 5969]),
    (13, 2633, &[1, 1, 3, 11, 3, 53, 19, 185, 37, 369, 931, 677, 4873]),
    (13, 2636, &[1, 3, 1, 3, 9, 27, 13, 141, 207, 227, 149, 1593, 8133]),
    (13, 2642, &[1, 1, 1, 11, 1, 37, 81, 57, 363, 111, 625, 311, 7299]),
    (13, 2654, &[1, 1, 5, 15, 3, 9, 49, 29, 267, 923, 1361, 2857, 4135]),
    (13, 2660, &[1, 1, 1, 15, 11, 3, 85, 133, 407, 729, 1091, 1789, 7167]),
    (13, 2669, &[1, 3, 1, 15, 31, 25, 47, 91, 243, 125, 1273, 533, 3977]),
    (13, 2675, &[1, 1, 7, 9, 23, 47, 101, 89, 501, 197, 1939, 2355, 89]),
    (13, 2684, &[1, 3, 7, 13, 23, 29, 15, 21, 451, 17, 583, 2395, 1589]),
    (13, 2694, &[1, 1, 5, 3, 23, 37, 53, 105, 101, 353, 619, 3819, 2099]),
    (13, 2703, &[1, 3, 3, 11, 9, 43, 53, 167, 125, 81, 721, 1309, 2885]),
    (13, 2706, &[1, 3, 7, 1, 31, 17, 7, 143, 285, 703, 1579, 3327, 2847]),
    (13, 2712, &[1, 3, 1, 3, 17, 7, 49, 157, 243, 839, 499, 1381, 6327]),
    (13, 2715, &[1, 3, 3, 5, 7, 25, 105, 87, 477, 783, 1977, 4015, 6055]),
    (13, 2722, &[1, 3, 3, 7, 29, 63, 79, 171, 285, 791, 729, 941, 6163]),
    (13, 2727, &[1, 3, 3, 9, 13, 11, 21, 5, 343, 977, 1999, 2471, 2687]),
    (13, 2734, &[1, 1, 5, 5, 21, 37, 121, 19, 417, 621, 1463, 2039, 7425]),
    (13, 2742, &[1, 1, 3, 9, 7, 41, 31, 119, 281, 549, 1459, 2765, 5031]),
    (13, 2745, &[1, 1, 3, 11, 19, 63, 119, 105, 359, 681, 565, 1049, 1897]),
    (13, 2751, &[1, 3, 7, 7, 19, 3, 17, 103, 123, 411, 1493, 937, 3093]),
    (13, 2766, &[1, 3, 1, 13, 25, 21, 25, 203, 163, 233, 1309, 2009, 5071]),
    (13, 2768, &[1, 1, 1, 1, 27, 53, 105, 201, 355, 711, 851, 465, 7085]),
    (13, 2780, &[1, 1, 7, 5, 25, 35, 123, 21, 77, 557, 1975, 4005, 1607]),
    (13, 2790, &[1, 3, 3, 1, 3, 11, 11, 147, 257, 641, 889, 799, 7783]),
    (13, 2794, &[1, 3, 3, 1, 5, 61, 71, 111, 395, 551, 975, 2879, 6229]),
    (13, 2796, &[1, 3, 7, 7, 11, 55, 51, 11, 115, 147, 135, 1119, 5447]),
    (13, 2801, &[1, 1, 3, 3, 13, 45, 23, 229, 333, 401, 1423, 125, 2695]),
    (13, 2804, &[1, 3, 7, 5, 3, 57, 89, 245, 347, 421, 1187, 1567, 3815]),
    (13, 2807, &[1, 1, 5, 1, 29, 35, 39, 155, 29, 787, 1271, 3097, 43]),
    (13, 2816, &[1, 3, 3, 11, 15, 15, 73, 191, 501, 567, 1977, 91, 8159]),
    (13, 2821, &[1, 3, 3, 3, 7, 55, 103, 23, 181, 467, 1659, 3583, 653]),
    (13, 2831, &[1, 3, 7, 13, 15, 31, 65, 65, 265, 17, 1595, 2675, 1443]),
    (13, 2834, &[1, 3, 1, 3, 21, 37, 53, 109, 501, 951, 1347, 3705, 7113]),
    (13, 2839, &[1, 1, 1, 13, 9, 13, 45, 9, 23, 173, 809, 2149, 3671]),
    (13, 2845, &[1, 3, 7, 9, 1, 19, 11, 163, 323, 179, 1215, 131, 3403]),
    (13, 2852, &[1, 3, 5, 9, 27, 47, 13, 49, 499, 651, 101, 225, 5163]),
    (13, 2856, &[1, 1, 3, 3, 25, 17, 35, 81, 11, 419, 527, 211, 5317]),
    (13, 2861, &[1, 3, 1, 3, 25, 61, 71, 99, 363, 291, 1883, 605, 6655]),
    (13, 2873, &[1, 1, 5, 11, 3, 39, 95, 179, 33, 25, 1845, 2949, 589]),
    (13, 2874, &[1, 1, 5, 13, 29, 53, 125, 221, 181, 979, 1011, 1549, 7273]),
    (13, 2888, &[1, 1, 3, 7, 3, 61, 19, 219, 139, 583, 275, 1605, 6621]),
    (13, 2893, &[1, 3, 1, 13, 9, 47, 27, 121, 275, 611, 949, 2311, 5065]),
    (13, 2894, &[1, 1, 5, 11, 23, 7, 119, 75, 279, 461, 451, 2097, 4469]),
    (13, 2902, &[1, 3, 7, 15, 23, 17, 123, 193, 329, 807, 249, 365, 1297]),
    (13, 2917, &[1, 1, 7, 15, 1, 21, 55, 131, 101, 615, 1571, 3021, 4387]),
    (13, 2921, &[1, 3, 7, 3, 19, 11, 31, 43, 271, 393, 493, 2877, 7293]),
    (13, 2922, &[1, 1, 1, 9, 11, 43, 95, 95, 193, 29, 351, 1637, 5783]),
    (13, 2929, &[1, 3, 5, 11, 7, 35, 35, 163, 141, 365, 1039, 545, 6011]),
    (13, 2935, &[1, 3, 3, 5, 15, 35, 61, 141, 283, 385, 1747, 959, 4073]),
    (13, 2946, &[1, 3, 5, 5, 13, 33, 9, 99, 361, 507, 1085, 1305, 1425]),
    (13, 2951, &[1, 1, 5, 1, 5, 21, 19, 89, 373, 299, 573, 3767, 7249]),
    (13, 2957, &[1, 1, 1, 9, 17, 5, 1, 127, 347, 991, 1995, 3285, 3763]),
    (13, 2960, &[1, 1, 5, 3, 13, 29, 89, 17, 263, 987, 737, 327, 7101]),
    (13, 2966, &[1, 1, 1, 13, 15, 53, 67, 197, 351, 23, 311, 3015, 2569]),
    (13, 2972, &[1, 3, 7, 11, 3, 3, 55, 193, 185, 207, 995, 781, 2825]),
    (13, 2976, &[1, 1, 3, 7, 3, 17, 59, 175, 337, 569, 1481, 2921, 5807]),
    (13, 2979, &[1, 3, 3, 11, 9, 13, 121, 63, 47, 689, 1275, 2275, 1403]),
    (13, 2985, &[1, 1, 7, 3, 11, 23, 117, 141, 449, 893, 419, 3177, 3155]),
    (13, 3000, &[1, 1, 1, 7, 7, 23, 49, 71, 503, 179, 1791, 3685, 3903]),
    (13, 3003, &[1, 1, 5, 9, 13, 19, 31, 7, 63, 315, 1103, 219, 5209]),
    (13, 3013, &[1, 3, 1, 15, 11, 25, 115, 117, 471, 247, 1321, 1889, 2399]),
    (13, 3018, &[1, 1, 5, 3, 1, 19, 49, 145, 129, 501, 1729, 1795, 1633]),
    (13, 3020, &[1, 3, 7, 15, 19, 49, 107, 29, 349, 449, 585, 267, 1953]),
    (13, 3025, &[1, 3, 5, 11, 23, 31, 93, 91, 275, 391, 1351, 1303, 4539]),
    (13, 3042, &[1, 3, 1, 7, 3, 11, 53, 85, 261, 325, 1693, 1741, 5549]),
    (13, 3047, &[1, 1, 3, 15, 31, 41, 91, 11, 9, 159, 25, 2857, 2069]),
    (13, 3048, &[1, 1, 3, 11, 25, 1, 125, 27, 67, 693, 1851, 2803, 5551]),
    (13, 3051, &[1, 1, 5, 3, 11, 9, 7, 195, 419, 393, 1527, 3123, 6565]),
    (13, 3054, &[1, 1, 5, 9, 5, 13, 17, 217, 235, 69, 2023, 2243, 5633]),
    (13, 3056, &[1, 3, 1, 7, 17, 25, 49, 47, 275, 27, 237, 3233, 581]),
    (13, 3065, &[1, 3, 5, 5, 17, 17, 119, 13, 85, 327, 961, 827, 639]),
    (13, 3073, &[1, 1, 7, 11, 13, 47, 93, 77, 129, 749, 1831, 4061, 5167]),
    (13, 3074, &[1, 3, 7, 13, 9, 21, 125, 87, 499, 737, 647, 2199, 2463]),
    (13, 3083, &[1, 3, 1, 3, 31, 49, 25, 21, 173, 699, 403, 4049, 337]),
    (13, 3086, &[1, 3, 3, 15, 23, 57, 39, 123, 335, 145, 1833, 361, 1975]),
    (13, 3091, &[1, 3, 1, 13, 3, 37, 57, 11, 3, 535, 1343, 445, 2313]),
    (13, 3097, &[1, 1, 3, 7, 13, 31, 85, 107, 73, 259, 1627, 1111, 1471]),
    (13, 3109, &[1, 1, 7, 15, 9, 51, 39, 67, 389, 935, 1195, 2055, 4333]),
    (13, 3116, &[1, 1, 3, 3, 9, 5, 11, 183, 187, 875, 1549, 1267, 1037]),
    (13, 3124, &[1, 1, 7, 7, 9, 35, 1, 73, 317, 481, 1857, 2627, 6285]),
    (13, 3128, &[1, 3, 5, 7, 3, 23, 87, 187, 373, 219, 35, 3517, 3759]),
    (13, 3153, &[1, 3, 5, 7, 5, 33, 51, 19, 43, 103, 1787, 3433, 2005]),
    (13, 3160, &[1, 1, 5, 5, 11, 35, 75, 155, 125, 961, 2047, 4089, 7269]),
    (13, 3165, &[1, 3, 7, 5, 23, 43, 5, 5, 263, 611, 1491, 3419, 3693]),
    (13, 3172, &[1, 3, 1, 13, 31, 17, 25, 63, 21, 253, 1159, 1285, 2015]),
    (13, 3175, &[1, 1, 3, 13, 11, 27, 53, 131, 377, 659, 1925, 3473, 6053]),
    (13, 3184, &[1, 3, 3, 5, 27, 45, 123, 99, 11, 951, 1071, 3115, 3041]),
    (13, 3193, &[1, 1, 5, 1, 3, 61, 55, 245, 127, 779, 1561, 1069, 1071]),
    (13, 3196, &[1, 3, 5, 11, 11, 21, 43, 179, 351, 823, 1125, 1203, 1773]),
    (13, 3200, &[1, 1, 1, 15, 15, 55, 77, 15, 469, 671, 31, 1755, 7441]),
    (13, 3203, &[1, 3, 5, 15, 17, 21, 39, 3, 371, 361, 263, 75, 7453]),
    (13, 3205, &[1, 1, 5, 9, 11, 1, 47, 121, 321, 131, 437, 3473, 3865]),
    (13, 3209, &[1, 3, 5, 11, 31, 1, 125, 1, 37, 215, 949, 3711, 237]),
    (13, 3224, &[1, 3, 5, 1, 11, 49, 15, 251, 357, 331, 173, 297, 7005]),
    (13, 3239, &[1, 3, 3, 3, 29, 15, 57, 227, 93, 17, 485, 1371, 5563]),
    (13, 3251, &[1, 3, 3, 3, 29, 63, 17, 231, 275, 633, 1767, 3907, 359]),
    (13, 3254, &[1, 1, 5, 9, 23, 31, 67, 193, 479, 909, 1323, 3451, 1447]),
    (13, 3265, &[1, 3, 1, 13, 15, 53, 35, 241, 11, 149, 317, 3795, 3063]),
    (13, 3266, &[1, 1, 3, 13, 31, 43, 63, 209, 385, 601, 241, 1437, 1015]),
    (13, 3275, &[1, 3, 3, 5, 23, 1, 45, 33, 77, 751, 1977, 3083, 2571]),
    (13, 3280, &[1, 3, 3, 1, 5, 61, 35, 167, 235, 361, 77, 3943, 3341]),
    (13, 3283, &[1, 3, 5, 5, 11, 31, 63, 197, 107, 37, 2019, 365, 4369]),
    (13, 3286, &[1, 3, 7, 1, 19, 41, 69, 145, 47, 73, 749, 1225, 7707]),
    (13, 3301, &[1, 1, 7, 7, 21, 61, 83, 63, 89, 883, 653, 1839, 4739]),
    (13, 3302, &[1, 1, 3, 1, 17, 49, 107, 55, 457, 963, 697, 1285, 2305]),
    (13, 3305, &[1, 1, 7, 1, 17, 51, 125, 171, 83, 503, 2005, 3457, 1283]),
    (13, 3319, &[1, 1, 3, 5, 5, 41, 55, 199, 203, 655, 1519, 1905, 7021]),
    (13, 3323, &[1, 3, 3, 7, 3, 15, 101, 243, 105, 121, 1959, 251, 6195]),
    (13, 3326, &[1, 1, 3, 9, 1, 45, 101, 137, 459, 35, 15, 351, 1321]),
    (13, 3331, &[1, 1, 7, 11, 13, 23, 107, 35, 157, 271, 87, 2025, 7571]),
    (13, 3348, &[1, 3, 3, 11, 9, 61, 113, 127, 291, 53, 231, 3719, 6175]),
    (13, 3351, &[1, 3, 7, 11, 19, 51, 63, 79, 323, 553, 1795, 1041, 6637]),
    (13, 3358, &[1, 1, 7, 7, 9, 1, 75, 69, 289, 409, 1187, 3659, 6119]),
    (13, 3368, &[1, 3, 5, 3, 31, 11, 113, 71, 175, 799, 201, 1331, 6683]),
    (13, 3374, &[1, 3, 3, 7, 5, 33, 9, 45, 73, 211, 1993, 743, 1125]),
    (13, 3376, &[1, 3, 5, 9, 7, 5, 17, 71, 251, 329, 1903, 3351, 4643]),
    (13, 3379, &[1, 1, 7, 15, 29, 61, 21, 181, 305, 319, 133, 3015, 1333]),
    (13, 3385, &[1, 3, 1, 5, 7, 51, 123, 227, 15, 735, 1435, 3347, 3799]),
    (13, 3386, &[1, 1, 1, 1, 11, 57, 69, 129, 501, 573, 977, 3925, 3389]),
    (13, 3396, &[1, 1, 3, 3, 29, 51, 101, 125, 149, 365, 355, 3455, 5141]),
    (13, 3420, &[1, 3, 1, 7, 17, 7, 117, 53, 9, 189, 1297, 2897, 6763]),
    (13, 3423, &[1, 1, 5, 9, 11, 59, 65, 165, 333, 517, 625, 3173, 7935]),
    (13, 3430, &[1, 3, 5, 9, 27, 61, 111, 93, 487, 187, 2005, 3843, 603]),
    (13, 3433, &[1, 1, 5, 13, 21, 23, 29, 195, 499, 547, 1691, 485, 2521]),
    (13, 3434, &[1, 1, 5, 13, 11, 53, 19, 173, 91, 179, 1765, 1663, 3057]),
    (13, 3439, &[1, 3, 3, 9, 9, 43, 75, 15, 73, 69, 1377, 1585, 3285]),
    (13, 3442, &[1, 1, 3, 3, 1, 27, 7, 65, 357, 243, 1745, 1547, 1313]),
    (13, 3444, &[1, 3, 7, 7, 11, 47, 111, 241, 239, 509, 1791, 3889, 6971]),
    (13, 3453, &[1, 1, 1, 7, 7, 7, 119, 221, 209, 561, 655, 3909, 6753]),
    (13, 3464, &[1, 1, 3, 3, 25, 15, 33, 65, 129, 793, 2015, 1181, 2901]),
    (13, 3477, &[1, 1, 7, 1, 23, 31, 27, 137, 79, 969, 953, 2183, 633]),
    (13, 3478, &[1, 1, 7, 7, 3, 61, 119, 137, 113, 205, 1627, 3145, 6593]),
    (13, 3482, &[1, 3, 5, 7, 13, 45, 31, 185, 103, 521, 847, 3783, 6145]),
    (13, 3487, &[1, 3, 7, 15, 9, 1, 39, 225, 179, 177, 43, 1025, 4729]),
    (13, 3497, &[1, 3, 5, 5, 9, 27, 87, 3, 43, 39, 61, 2033, 3033]),
    (13, 3500, &[1, 1, 1, 13, 9, 7, 115, 125, 259, 181, 1317, 1989, 2439]),
    (13, 3505, &[1, 1, 5, 13, 27, 57, 29, 103, 409, 481, 1603, 3085, 6881]),
    (13, 3506, &[1, 3, 5, 1, 31, 19, 87, 247, 159, 393, 1347, 3567, 6849]),
    (13, 3511, &[1, 3, 7, 7, 31, 13, 43, 189, 213, 699, 1789, 121, 701]),
    (13, 3512, &[1, 1, 3, 5, 1, 43, 35, 25, 279, 293, 1199, 187, 721]),
    (13, 3515, &[1, 1, 3, 3, 15, 27, 125, 5, 265, 449, 1175, 2715, 7063]),
    (13, 3525, &[1, 3, 7, 7, 27, 21, 25, 47, 165, 285, 1651, 1815, 2499]),
    (13, 3532, &[1, 1, 5, 9, 5, 31, 75, 19, 371, 411, 1733, 427, 7573]),
    (13, 3538, &[1, 1, 3, 5, 13, 27, 73, 251, 257, 313, 1085, 1901, 783]),
    (13, 3540, &[1, 1, 7, 3, 25, 37, 101, 227, 311, 599, 131, 47, 7677]),
    (13, 3547, &[1, 3, 3, 7, 19, 49, 43, 221, 459, 613, 1999, 4053, 6291]),
    (13, 3549, &[1, 1, 5, 15, 27, 47, 111, 151, 329, 263, 909, 2487, 1717]),
    (13, 3560, &[1, 3, 1, 5, 1, 33, 17, 161, 9, 975, 595, 1767, 7387]),
    (13, 3571, &[1, 3, 3, 1, 3, 39, 125, 69, 365, 81, 1825, 1985, 85]),
    (13, 3577, &[1, 3, 3, 13, 17, 5, 105, 243, 351, 271, 1603, 717, 491]),
    (13, 3583, &[1, 3, 3, 1, 5, 15, 99, 47, 151, 421, 247, 3129, 1809]),
    (13, 3590, &[1, 3, 7, 11, 13, 57, 127, 135, 357, 583, 1731, 3513, 2067]),
    (13, 3593, &[1, 1, 1, 15, 23, 43, 23, 43, 383, 23, 1191, 2195, 3605]),
    (13, 3594, &[1, 3, 1, 9, 1, 49, 127, 211, 205, 791, 401, 1199, 7353]),
    (13, 3599, &[1, 1, 5, 9, 13, 5, 51, 241, 101, 703, 701, 549, 5463]),
    (13, 3601, &[1, 3, 1, 13, 23, 21, 21, 199, 95, 759, 1349, 3845, 8091]),
    (13, 3602, &[1, 1, 1, 5, 19, 45, 123, 39, 385, 5, 1357, 2673, 3847]),
    (13, 3613, &[1, 3, 5, 3, 25, 57, 113, 195, 295, 817, 601, 2847, 1645]),
    (13, 3623, &[1, 1, 7, 5, 31, 63, 53, 129, 247, 627, 1325, 1953, 6237]),
    (13, 3630, &[1, 1, 7, 5, 7, 21, 75, 161, 275, 471, 317, 401, 1683]),
    (13, 3638, &[1, 3, 5, 13, 13, 5, 59, 79, 425, 931, 1539, 2043, 8167]),
    (13, 3649, &[1, 3, 5, 5, 13, 19, 79, 29, 311, 693, 847, 3445, 1463]),
    (13, 3655, &[1, 1, 3, 15, 9, 25, 109, 61, 81, 951, 1727, 3373, 1097]),
    (13, 3662, &[1, 3, 7, 3, 13, 15, 89, 229, 89, 803, 189, 4081, 3465]),
    (13, 3667, &[1, 3, 1, 3, 15, 11, 39, 185, 489, 63, 859, 459, 6211]),
    (13, 3669, &[1, 3, 7, 3, 17, 29, 79, 83, 49, 117, 839, 385, 2255]),
    (13, 3676, &[1, 1, 1, 1, 5, 27, 39, 167, 65, 787, 1693, 1793, 1793]),
    (13, 3683, &[1, 3, 1, 11, 27, 9, 113, 101, 63, 359, 1479, 3203, 5301]),
    (13, 3700, &[1, 3, 1, 9, 7, 29, 47, 83, 173, 519, 455, 717, 1077]),
    (13, 3709, &[1, 3, 3, 7, 25, 9, 121, 83, 139, 597, 695, 1909, 3355]),
    (13, 3710, &[1, 1, 1, 5, 7, 33, 113, 183, 509, 383, 241, 2305, 6785]),
    (13, 3713, &[1, 3, 7, 1, 1, 57, 85, 99, 433, 195, 591, 1981, 1607]),
    (13, 3723, &[1, 3, 7, 3, 23, 9, 59, 75, 285, 787, 803, 1233, 5555]),
    (13, 3725, &[1, 3, 5, 1, 3, 27, 3, 239, 205, 793, 809, 589, 3367]),
    (13, 3728, &[1, 3, 7, 11, 23, 7, 113, 179, 425, 153, 1157, 2861, 1671]),
    (13, 3734, &[1, 3, 5, 11, 29, 55, 121, 251, 171, 677, 1213, 337, 8037]),
    (13, 3737, &[1, 3, 7, 1, 19, 3, 45, 181, 413, 427, 1939, 1333, 6967]),
    (13, 3738, &[1, 1, 7, 3, 31, 53, 5, 43, 153, 799, 539, 3259, 3055]),
    (13, 3744, &[1, 1, 5, 9, 13, 45, 113, 133, 47, 183, 1887, 1565, 5511]),
    (13, 3750, &[1, 3, 7, 15, 15, 57, 69, 43, 501, 737, 627, 3767, 717]),
    (13, 3762, &[1, 3, 5, 5, 9, 63, 89, 211, 197, 931, 1675, 1075, 8027]),
    (13, 3764, &[1, 3, 3, 5, 3, 47, 127, 7, 413, 763, 1823, 557, 4539]),
    (13, 3774, &[1, 1, 3, 11, 9, 55, 107, 213, 321, 277, 1423, 719, 4619]),
    (13, 3776, &[1, 3, 3, 7, 31, 3, 81, 95, 453, 253, 771, 2591, 2493]),
    (13, 3786, &[1, 1, 3, 5, 21, 51, 105, 153, 409, 289, 1969, 4071, 3169]),
    (13, 3800, &[1, 3, 1, 5, 9, 7, 11, 1, 503, 913, 279, 4029, 2383]),
    (13, 3803, &[1, 1, 7, 13, 27, 27, 101, 103, 229, 347, 491, 3575, 231]),
    (13, 3809, &[1, 1, 5, 9, 27, 29, 109, 225, 373, 515, 729, 285, 5217]),
    (13, 3816, &[1, 3, 5, 1, 5, 57, 27, 45, 241, 631, 127, 4021, 259]),
    (13, 3821, &[1, 1, 1, 7, 21, 19, 43, 55, 427, 317, 1649, 3991, 5599]),
    (13, 3827, &[1, 1, 1, 1, 23, 63, 93, 107, 97, 189, 901, 2251, 6925]),
    (13, 3829, &[1, 3, 1, 9, 5, 15, 103, 77, 359, 75, 1331, 2223, 4551]),
    (13, 3836, &[1, 3, 1, 3, 5, 11, 101, 159, 163, 183, 1409, 1849, 5413]),
    (13, 3842, &[1, 1, 1, 13, 11, 53, 113, 97, 63, 373, 165, 933, 3145]),
    (13, 3844, &[1, 1, 5, 5, 29, 59, 73, 177, 383, 821, 1649, 1387, 3401]),
    (13, 3847, &[1, 1, 5, 9, 27, 57, 83, 55, 427, 921, 1761, 3095, 603]),
    (13, 3853, &[1, 3, 3, 9, 25, 23, 39, 157, 107, 649, 1669, 2417, 5777]),
    (13, 3861, &[1, 3, 5, 11, 7, 35, 89, 207, 491, 723, 1769, 707, 1661]),
    (13, 3871, &[1, 1, 1, 11, 19, 49, 101, 217, 149, 923, 305, 1821, 2179]),
    (13, 3872, &[1, 3, 5, 1, 29, 63, 69, 163, 259, 471, 1495, 2707, 355]),
    (13, 3881, &[1, 3, 7, 3, 29, 11, 27, 65, 59, 729, 935, 3193, 3883]),
    (13, 3890, &[1, 1, 1, 15, 23, 13, 95, 193, 273, 663, 585, 1785, 7455]),
    (13, 3892, &[1, 3, 5, 3, 31, 59, 117, 221, 181, 989, 1211, 2189, 1529]),
    (13, 3909, &[1, 3, 5, 11, 21, 15, 89, 83, 61, 421, 1299, 2569, 7965]),
    (13, 3921, &[1, 3, 3, 15, 17, 15, 119, 235, 305, 671, 1733, 795, 7299]),
    (13, 3934, &[1, 3, 3, 3, 7, 37, 111, 207, 323, 17, 1861, 1571, 7473]),
    (13, 3938, &[1, 3, 7, 11, 7, 35, 73, 1, 167, 353, 431, 2881, 5527]),
    (13, 3947, &[1, 3, 1, 15, 25, 33, 23, 145, 225, 145, 473, 1697, 3981]),
    (13, 3950, &[1, 3, 3, 15, 15, 9, 95, 105, 17, 845, 699, 1745, 1247]),
    (13, 3952, &[1, 1, 3, 13, 1, 3, 87, 173, 33, 527, 1807, 1379, 3519]),
    (13, 3964, &[1, 1, 5, 9, 15, 19, 5, 121, 391, 733, 735, 4043, 71]),
    (13, 3974, &[1, 3, 7, 11, 27, 9, 59, 35, 125, 877, 489, 1829, 3199]),
    (13, 3980, &[1, 3, 5, 1, 17, 29, 21, 221, 413, 373, 1593, 2719, 1453]),
    (13, 3983, &[1, 1, 5, 11, 19, 53, 45, 157, 439, 333, 1929, 161, 4537]),
    (13, 3986, &[1, 3, 3, 1, 3, 59, 101, 63, 43, 297, 1399, 3421, 2915]),
    (13, 3995, &[1, 3, 1, 11, 27, 17, 37, 153, 297, 781, 1309, 923, 7351]),
    (13, 3998, &[1, 3, 5, 15, 9, 63, 27, 103, 235, 565, 1197, 1409, 7225]),
    (13, 4001, &[1, 1, 5, 3, 9, 47, 113, 7, 97, 683, 1451, 849, 4533]),
    (13, 4002, &[1, 1, 3, 13, 3, 5, 7, 241, 379, 641, 837, 1253, 1467]),
    (13, 4004, &[1, 3, 3, 5, 11, 45, 1, 211, 21, 25, 109, 3861, 4039]),
    (13, 4008, &[1, 3, 7, 3, 29, 25, 107, 175, 71, 167, 157, 1779, 4487]),
    (13, 4011, &[1, 1, 3, 7, 15, 1, 87, 171, 197, 373, 1911, 323, 3863]),
    (13, 4016, &[1, 3, 5, 13, 9, 25, 21, 155, 193, 311, 921, 1671, 2601]),
    (13, 4033, &[1, 1, 7, 9, 25, 1, 23, 239, 357, 135, 1531, 3893, 7857]),
    (13, 4036, &[1, 1, 5, 9, 21, 19, 13, 1, 31, 567, 655, 2665, 4753]),
    (13, 4040, &[1, 1, 1, 1, 19, 33, 47, 199, 67, 437, 515, 495, 1979]),
    (13, 4053, &[1, 1, 1, 5, 9, 37, 93, 235, 423, 105, 1575, 3809, 7303]),
    (13, 4058, &[1, 3, 7, 5, 11, 3, 57, 65, 143, 997, 1013, 2497, 731]),
    (13, 4081, &[1, 3, 3, 11, 13, 3, 97, 83, 483, 915, 1769, 3461, 3537]),
    (13, 4091, &[1, 1, 3, 3, 21, 33, 21, 13, 59, 1015, 1091, 103, 3377]),
    (13, 4094, &[1, 1, 1, 11, 9, 23, 71, 111, 409, 927, 1881, 2231, 3149]),
];
