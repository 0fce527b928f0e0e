use crate::aa::{AAFramework, Extension, LabelType};

// Computes the ids of the arguments of the grounded extension, in the order they are discovered.
pub(crate) fn grounded_extension_ids<T>(af: &AAFramework<T>) -> Vec<usize>
where
    T: LabelType,
{
    let mut ext = vec![];
    let mut n_processed_args = 0;
    let mut defeated_args = vec![false; af.n_arguments()];
    let mut attacked_by = (0..af.n_arguments())
        .map(|i| {
            let n = af.attacker_ids(i).len();
            if n == 0 {
                ext.push(i)
            }
            n
        })
        .collect::<Vec<usize>>();
    while n_processed_args < ext.len() {
        let id = ext[n_processed_args];
        af.attacked_ids(id).iter().for_each(|defeated| {
            if !defeated_args[*defeated] {
                defeated_args[*defeated] = true;
                af.attacked_ids(*defeated).iter().for_each(|attacked| {
                    if attacked_by[*attacked] == 1 {
                        ext.push(*attacked)
                    } else {
                        attacked_by[*attacked] -= 1;
                    }
                })
            }
        });
        n_processed_args += 1;
    }
    ext
}

/// Computes the grounded extension of an AF.
///
/// The grounded extension is the least fixpoint of the characteristic function of the framework.
/// It is computed without any search: unattacked arguments are accepted first,
/// then each argument defeated by an accepted one decrements the number of pending attackers of its targets;
/// an argument is accepted when this number falls to zero.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> Extension<'_, T>
where
    T: LabelType,
{
    grounded_extension_ids(af)
        .into_iter()
        .map(|i| af.argument_set().get_argument_by_id(i))
        .collect()
}
