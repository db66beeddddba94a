//! Generator points of the Pedersen hash.
//!
//! Segment `i` of the input is weighted by `GENERATORS[i]`. The table is
//! `derive_generator(GENERATOR_DOMAIN, i)` for i in 0..16, written out so
//! that hashing never has to search for square roots. It is parsed once,
//! on first use, behind a `LazyLock`.

use std::sync::LazyLock;

use curve::{Affine, BaseField, BigUint, COFACTOR};
use sha2::{Digest, Sha256};

use crate::constants::{GENERATOR_COUNT, MAX_DOMAIN_LEN};
use crate::errors::PedersenError;

const GENERATOR_COORDINATES: [(&str, &str); GENERATOR_COUNT] = [
    (
        "17434558536782967610340762605448133754549234172198748128207635616973179917758",
        "13809929214859773185494095338070573446620668786591540427529120055108311408601",
    ),
    (
        "20881191793028387546033104172192345421491262837680372142491907592652070161952",
        "5075784556128217284685225562241792312450302661801014564715596050958001884858",
    ),
    (
        "8520090440088786753637148399502745058630978778520003292078671435389456269403",
        "19065955179398565181112355398967936758982488978618882004783674372269664446856",
    ),
    (
        "8252178246422932554470545827089444002049004598962888144864423033128179910983",
        "15651909989309155104946748757069215505870124528799433233405947236802744549198",
    ),
    (
        "19613701345946521139252906631403624319214524383237318926155152603812484828018",
        "21617320264895522741112711536582628848652483577841815747293999179732881991324",
    ),
    (
        "6155843579522854755336642611280808148477209989679852488581779041749546316723",
        "15124604226542856727295916283584414325323133979788055132476373290093561626104",
    ),
    (
        "2255552864031882424600016198277712968759818455778666488135834801088901251869",
        "20183282562651407227856572417097745017658254303953678131504564910170801603804",
    ),
    (
        "6469785718442780390486680321473277194625672464989021922834954388533973416947",
        "5600720436353295795527652424649353386087879374665126501551955649891196987168",
    ),
    (
        "19822747198989782322000510862227895356015581531461191546205046465967845769480",
        "3800393707849833921842859875819017737993884042392479832962251554847033783794",
    ),
    (
        "13192756298671850790699683040215548099827079575802906088020686947302693197590",
        "15505416863289104356092986110151912620791488195851478629191143516742613361168",
    ),
    (
        "18560102673687823485116829139621115053143552521166551213701801882562371217282",
        "10307434402517116643130434991160224925935404048340663697789562678353393350945",
    ),
    (
        "2057772344621474045072424942625594353543824932258082979347356401434340603339",
        "9271962792672945572461177416070781404722535683304151725175708012818363437950",
    ),
    (
        "20589488268290330549487301059545065722105705099391877301332342708330102762332",
        "8026770410252218549640047551737281865893246496274084280073418895088798333026",
    ),
    (
        "21689055109037706594381163816282145658696264799278562188804299288500663789636",
        "9723117501871279186268866962492259704047086485378031232534349179916320302814",
    ),
    (
        "8022608026033626000482912711103520220925497334883774048025153383963877259835",
        "4493789842837389901981752813600418331832103036167110840525806584079293941456",
    ),
    (
        "515135128122729621648366388679009614561392702855117581489845826368034708957",
        "18817782348396407942458487293128606527632521505005672364341874932095389458519",
    ),
];

static GENERATORS: LazyLock<Vec<Affine>> = LazyLock::new(|| {
    GENERATOR_COORDINATES
        .iter()
        .map(|(x, y)| {
            let x = BaseField::from_decimal(x).expect("generator x is a field element");
            let y = BaseField::from_decimal(y).expect("generator y is a field element");
            Affine::new(x, y)
        })
        .collect()
});

/// The full generator table.
pub fn generators() -> &'static [Affine] {
    &GENERATORS
}

/// Generator for segment `index`.
pub fn generator(index: usize) -> Result<&'static Affine, PedersenError> {
    GENERATORS
        .get(index)
        .ok_or(PedersenError::GeneratorOutOfRange {
            index,
            len: GENERATORS.len(),
        })
}

/// Hash-to-point used to produce the generator table.
///
/// The seed is the domain left-justified to 28 bytes followed by the index as
/// four upper-case hex digits. Its SHA-256 digest, read big-endian and reduced
/// mod p, is the first candidate y; y is incremented until a point exists.
/// The root x above (p-1)/2 is taken and the point is multiplied by the
/// cofactor so that it lands in the prime-order subgroup.
pub fn derive_generator(domain: &str, index: usize) -> Result<Affine, PedersenError> {
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(PedersenError::DomainTooLong {
            domain: domain.to_string(),
            max: MAX_DOMAIN_LEN,
        });
    }

    let seed = format!("{domain:<width$}{index:04X}", width = MAX_DOMAIN_LEN);
    let digest = Sha256::digest(seed.as_bytes());
    let mut y = BaseField::new(BigUint::from_bytes_be(&digest));

    let mut attempts = 0u32;
    let point = loop {
        if let Some(point) = Affine::from_y(y.clone(), true) {
            break point;
        }
        y += BaseField::one();
        attempts += 1;
    };

    tracing::debug!(domain, index, attempts, "derived pedersen generator");
    Ok(point.mul_scalar(&BigUint::from(COFACTOR)))
}
