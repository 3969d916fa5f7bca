//! Reading schedule rows, one per year configuration.
//!
//! Each row lists the reading for every Saturday of one annual cycle,
//! starting with the first Saturday on or after 23 Tishrei (the first
//! regular Shabbat after the autumn festivals) and running through the
//! pre-cycle Saturdays of the following Tishrei. Entries are
//! `(first, second)` reading numbers; `0` means no entry (festival Shabbat
//! or past the end of the cycle), a nonzero `second` marks a doubled
//! reading. Row order matches [`YearType::index`](crate::YearType::index).

/// Saturdays covered per row. Leap cycles span exactly 55 weeks.
pub(crate) const WEEKS: usize = 55;

pub(crate) const SCHEDULE: [[(u8, u8); WEEKS]; 14] = [
    // MonDeficientTue
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 23), (24, 0), (25, 0), (0, 0), (26, 0), (27, 28), (29, 30), (31, 0), (32, 33), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 43), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 52), (53, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // SatDeficientSun
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 23), (24, 0), (25, 0), (0, 0), (26, 0), (27, 28), (29, 30), (31, 0), (32, 33), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 43), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 0), (52, 0), (53, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // TueRegularThu
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 23), (24, 0), (25, 0), (0, 0), (26, 0), (27, 28), (29, 30), (31, 0), (32, 33), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 43), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 52), (0, 0), (53, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // ThuRegularSat
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 23), (24, 0), (25, 0), (0, 0), (26, 0), (27, 28), (29, 30), (31, 0), (32, 0), (33, 0), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 43), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 0), (52, 0), (53, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // MonCompleteThu
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 23), (24, 0), (25, 0), (0, 0), (26, 0), (27, 28), (29, 30), (31, 0), (32, 33), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 43), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 52), (0, 0), (53, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // ThuCompleteSun
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 0), (23, 0), (24, 0), (25, 0), (0, 0), (26, 0), (27, 28), (29, 30), (31, 0), (32, 33), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 43), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 0), (52, 0), (53, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // SatCompleteTue
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 23), (24, 0), (25, 0), (0, 0), (26, 0), (27, 28), (29, 30), (31, 0), (32, 33), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 43), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 52), (53, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // MonDeficientThu
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 0), (23, 0), (24, 0), (25, 0), (26, 0), (27, 0), (28, 0), (0, 0), (29, 0), (30, 0), (31, 0), (32, 0), (33, 0), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 43), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 52), (0, 0), (53, 0), (0, 0), (0, 0)],
    // ThuDeficientSun
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 0), (23, 0), (24, 0), (25, 0), (26, 0), (27, 0), (28, 0), (29, 0), (0, 0), (30, 0), (31, 0), (32, 0), (33, 0), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 0), (43, 0), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 0), (52, 0), (53, 0), (0, 0)],
    // SatDeficientTue
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 0), (23, 0), (24, 0), (25, 0), (26, 0), (27, 0), (28, 0), (0, 0), (29, 0), (30, 0), (31, 0), (32, 0), (33, 0), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 43), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 52), (53, 0), (0, 0), (0, 0), (0, 0)],
    // TueRegularSat
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 0), (23, 0), (24, 0), (25, 0), (26, 0), (27, 0), (28, 0), (0, 0), (29, 0), (30, 0), (31, 0), (32, 0), (33, 0), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 0), (43, 0), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 0), (52, 0), (53, 0), (0, 0)],
    // MonCompleteSat
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 0), (23, 0), (24, 0), (25, 0), (26, 0), (27, 0), (28, 0), (0, 0), (29, 0), (30, 0), (31, 0), (32, 0), (33, 0), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 0), (43, 0), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 0), (52, 0), (53, 0), (0, 0)],
    // ThuCompleteTue
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 0), (23, 0), (24, 0), (25, 0), (26, 0), (27, 0), (28, 0), (29, 0), (0, 0), (30, 0), (31, 0), (32, 0), (33, 0), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 0), (43, 0), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 52), (53, 0), (0, 0), (0, 0)],
    // SatCompleteThu
    [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0), (18, 0), (19, 0), (20, 0), (21, 0), (22, 0), (23, 0), (24, 0), (25, 0), (26, 0), (27, 0), (28, 0), (0, 0), (29, 0), (30, 0), (31, 0), (32, 0), (33, 0), (34, 0), (35, 0), (36, 0), (37, 0), (38, 0), (39, 0), (40, 0), (41, 0), (42, 43), (44, 0), (45, 0), (46, 0), (47, 0), (48, 0), (49, 0), (50, 0), (51, 52), (0, 0), (53, 0), (0, 0), (0, 0)],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_covers_all_readings() {
        for (i, row) in SCHEDULE.iter().enumerate() {
            let mut seen = [false; 54];
            for &(a, b) in row {
                for n in [a, b] {
                    if n != 0 {
                        assert!(!seen[n as usize - 1], "row {i}: reading {n} repeats");
                        seen[n as usize - 1] = true;
                    }
                }
            }
            // 1..=53 each appear once; 54 is read on the festival itself.
            for (n, &s) in seen.iter().enumerate() {
                assert_eq!(s, n < 53, "row {i}: reading {}", n + 1);
            }
        }
    }

    #[test]
    fn every_cycle_opens_with_the_first_reading() {
        for (i, row) in SCHEDULE.iter().enumerate() {
            assert_eq!(row[0], (1, 0), "row {i}");
        }
    }

    #[test]
    fn rows_are_ordered_within_pairs() {
        for row in &SCHEDULE {
            for &(a, b) in row {
                if b != 0 {
                    assert_eq!(b, a + 1, "doubled readings are consecutive");
                }
            }
        }
    }

    #[test]
    fn common_rows_fit_fifty_one_weeks() {
        // Common-year cycles span 51 Saturdays, leap cycles 55.
        for (i, row) in SCHEDULE.iter().enumerate() {
            let used = row
                .iter()
                .rposition(|&(a, _)| a != 0)
                .map(|p| p + 1)
                .unwrap_or(0);
            if i < 7 {
                assert!(used <= 51, "row {i} uses {used} weeks");
            } else {
                assert!(used <= 55, "row {i} uses {used} weeks");
            }
        }
    }
}
