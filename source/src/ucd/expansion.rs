use std::collections::HashMap;

use crate::tables::Decompositions;

/// раскрываем декомпозиции до неподвижной точки: ни одно значение не содержит символов,
/// имеющих собственную декомпозицию
pub fn expand(mut decompositions: HashMap<char, Vec<char>>) -> Decompositions
{
    loop {
        let mut changed = vec![];

        for (&c, codes) in decompositions.iter() {
            if !codes.iter().any(|code| decompositions.contains_key(code)) {
                continue;
            }

            let expanded: Vec<char> = codes
                .iter()
                .flat_map(|code| match decompositions.get(code) {
                    Some(inner) => inner.clone(),
                    None => vec![*code],
                })
                .collect();

            changed.push((c, expanded));
        }

        if changed.is_empty() {
            break;
        }

        decompositions.extend(changed);
    }

    decompositions
        .into_iter()
        .map(|(c, codes)| (c, codes.into_boxed_slice()))
        .collect()
}
