use rand::seq::SliceRandom;
use rand::Rng;

const MIN_INGREDIENTS: usize = 3;
const MAX_INGREDIENTS: usize = 7;

pub static PANTRY: [&str; 15] = [
    "chicken breast",
    "olive oil",
    "salt",
    "pepper",
    "garlic",
    "onion",
    "bell pepper",
    "tomatoes",
    "rice",
    "pasta",
    "flour",
    "sugar",
    "butter",
    "milk",
    "eggs",
];

/// Pick a few distinct pantry staples in random order.
/// The recipe text is accepted for the interface but not analysed.
pub fn mock_extract<R: Rng + ?Sized>(_recipe_instructions: &str, rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(MIN_INGREDIENTS..=MAX_INGREDIENTS);

    PANTRY
        .choose_multiple(rng, count)
        .map(|ingredient| ingredient.to_string())
        .collect()
}
