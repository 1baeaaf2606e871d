//! Model year codes (VIN position 10).
//!
//! The code cycle repeats every 30 years, so most symbols stand for two
//! model years. `U`, `Z` and `0` are never assigned.

/// `(code, candidate years)` in ascending year order.
pub static YEAR_CODES: &[(char, &[u16])] = &[
    ('A', &[1980, 2010]),
    ('B', &[1981, 2011]),
    ('C', &[1982, 2012]),
    ('D', &[1983, 2013]),
    ('E', &[1984, 2014]),
    ('F', &[1985, 2015]),
    ('G', &[1986, 2016]),
    ('H', &[1987, 2017]),
    ('J', &[1988, 2018]),
    ('K', &[1989, 2019]),
    ('L', &[1990, 2020]),
    ('M', &[1991, 2021]),
    ('N', &[1992, 2022]),
    ('P', &[1993, 2023]),
    ('R', &[1994, 2024]),
    ('S', &[1995, 2025]),
    ('T', &[1996, 2026]),
    ('U', &[]),
    ('V', &[1997, 2027]),
    ('W', &[1998, 2028]),
    ('X', &[1999, 2029]),
    ('Y', &[2000, 2030]),
    ('Z', &[]),
    ('1', &[2001, 2031]),
    ('2', &[2002, 2032]),
    ('3', &[2003, 2033]),
    ('4', &[2004, 2034]),
    ('5', &[2005, 2035]),
    ('6', &[2006, 2036]),
    ('7', &[2007, 2037]),
    ('8', &[2008, 2038]),
    ('9', &[2009, 2039]),
    ('0', &[]),
];
