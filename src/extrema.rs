use crate::error::SortError;

/// Returns `(min, max)` of all keys in `v`, evaluating `key` exactly once per element.
pub fn find_min_max<T, F>(v: &[T], mut key: F) -> Result<(i64, i64), SortError>
where
    F: FnMut(&T) -> i64,
{
    let (first, rest) = v.split_first().ok_or(SortError::EmptyInput)?;

    let first_key = key(first);
    let min_max = rest
        .iter()
        .map(key)
        .fold((first_key, first_key), |(min, max), k| {
            (min.min(k), max.max(k))
        });

    Ok(min_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(
            find_min_max::<i64, _>(&[], |&x| x),
            Err(SortError::EmptyInput)
        );
    }

    #[test]
    fn single() {
        assert_eq!(find_min_max(&[42i64], |&x| x), Ok((42, 42)));
    }

    #[test]
    fn mixed_signs() {
        let v = [170i64, -45, 75, 90, 802, -24, 2, 66];
        assert_eq!(find_min_max(&v, |&x| x), Ok((-45, 802)));
    }

    #[test]
    fn uses_projection() {
        let v = [("b", 3i64), ("a", -7), ("c", 11)];
        assert_eq!(find_min_max(&v, |e| e.1), Ok((-7, 11)));
    }

    #[test]
    fn int_edge() {
        let v = [0, i64::MAX, i64::MIN, -1];
        assert_eq!(find_min_max(&v, |&x| x), Ok((i64::MIN, i64::MAX)));
    }

    #[test]
    fn one_key_call_per_element() {
        let v: Vec<i64> = (0..57).rev().collect();
        let mut calls = 0;
        let res = find_min_max(&v, |&x| {
            calls += 1;
            x
        });

        assert_eq!(res, Ok((0, 56)));
        assert_eq!(calls, v.len());
    }
}
