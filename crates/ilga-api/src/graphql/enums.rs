//! GraphQL-facing enums, mirroring the domain enums in `ilga-core`.

use async_graphql::Enum;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum ChamberFilter {
    House,
    Senate,
}

impl From<ChamberFilter> for ilga_core::Chamber {
    fn from(value: ChamberFilter) -> Self {
        match value {
            ChamberFilter::House => Self::House,
            ChamberFilter::Senate => Self::Senate,
        }
    }
}

impl From<ilga_core::Chamber> for ChamberFilter {
    fn from(value: ilga_core::Chamber) -> Self {
        match value {
            ilga_core::Chamber::House => Self::House,
            ilga_core::Chamber::Senate => Self::Senate,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum PartyType {
    Democrat,
    Republican,
    Other,
}

impl From<ilga_core::Party> for PartyType {
    fn from(value: ilga_core::Party) -> Self {
        match value {
            ilga_core::Party::Democrat => Self::Democrat,
            ilga_core::Party::Republican => Self::Republican,
            ilga_core::Party::Other => Self::Other,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Default)]
pub enum MemberSortBy {
    #[default]
    Name,
    District,
    MoneyballScore,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Default)]
pub enum BillSortBy {
    #[default]
    LastActionDate,
    BillNumber,
    PipelineDepth,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum VoteKindFilter {
    CommitteeVote,
    FloorThirdReading,
    Concurrence,
    Override,
    Other,
}

impl From<ilga_core::VoteKind> for VoteKindFilter {
    fn from(value: ilga_core::VoteKind) -> Self {
        match value {
            ilga_core::VoteKind::CommitteeVote => Self::CommitteeVote,
            ilga_core::VoteKind::FloorThirdReading => Self::FloorThirdReading,
            ilga_core::VoteKind::Concurrence => Self::Concurrence,
            ilga_core::VoteKind::Override => Self::Override,
            ilga_core::VoteKind::Other => Self::Other,
        }
    }
}

impl From<VoteKindFilter> for ilga_core::VoteKind {
    fn from(value: VoteKindFilter) -> Self {
        match value {
            VoteKindFilter::CommitteeVote => Self::CommitteeVote,
            VoteKindFilter::FloorThirdReading => Self::FloorThirdReading,
            VoteKindFilter::Concurrence => Self::Concurrence,
            VoteKindFilter::Override => Self::Override,
            VoteKindFilter::Other => Self::Other,
        }
    }
}
