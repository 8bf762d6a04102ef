// PEDSKETCH - Pedigree sketches from pairwise relatedness
// Copyright (C) 2024  The PEDSKETCH authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

#[derive(Debug)]
pub enum PedigreeError {
    RelatednessParseError((u64, String)),
    UnknownRelationshipCode((u64, String)),
    ColumnCountError((usize, usize)),
    MaxDistanceError((u32, u32)),
    ZeroPathsError,
}

impl std::fmt::Display for PedigreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelatednessParseError((line, value)) => write!(
                f,
                "Could not read relatedness {value:?} as a number on line {line}"
            ),
            Self::UnknownRelationshipCode((line, code)) => write!(
                f,
                "Relationship code {code:?} on line {line} is not understood. Known codes are PO, FS, HS and U."
            ),
            Self::ColumnCountError((expected, found)) => {
                write!(f, "Expected a header with {expected} columns, found {found}")
            }
            Self::MaxDistanceError((given, max)) => write!(
                f,
                "The input does not encode relational distances larger than {max}, set --max-distance <= {max} (given {given})."
            ),
            Self::ZeroPathsError => write!(f, "The number of shortest paths per pair needs to be at least one."),
        }
    }
}
