/// Common words and lyric phrases that show up in the artist column of
/// scraped song data but are not artist names. Matched case-sensitively
/// against the whole candidate and against its individual words.
pub static DEFAULT_REJECTION_LIST: &[&str] = &[
    "Oh", "Yeah", "No", "Hey", "Well", "Ooh", "Yes", "Baby", "La", "Ah",
    "So", "I", "You", "And", "The", "A", "An", "In", "On", "At", "To",
    "For", "With", "By", "Of", "Is", "Go", "Do", "Be", "We", "He", "She",
    "It", "My", "Our", "His", "Her", "Come on", "I said", "But", "Whoa",
    "Now", "Lord", "Who", "What", "When", "Where", "Why", "How", "All",
    "Some", "Many", "Few", "One", "Two", "Three", "First", "Last", "Next",
    "Here", "There", "This", "That", "These", "Those", "Come", "Get",
    "Make", "Take", "Give", "Want", "Need", "Like", "Love", "Know", "Think",
    "Say", "Tell", "Ask", "Look", "See", "Find", "Feel", "Hear", "Listen",
    "Talk", "Speak", "Call", "Try", "Help", "Work", "Play", "Stop", "Start",
    "End", "Begin", "Keep", "Let", "Put", "Turn", "Move", "Run", "Walk",
    "Sit", "Stand", "Open", "Close", "Show", "Hide", "Send", "Bring",
    "Na", "Da", "De", "Em", "Para", "Por", "Com", "Sem", "Mas",
    "Ou", "E", "O", "Um", "Uma", "Uns", "Umas", "Este", "Esta",
    "Isto", "Esse", "Essa", "Isso", "Aquele", "Aquela", "Aquilo",
    "Meu", "Minha", "Seu", "Sua", "Nosso", "Nossa", "Dele", "Dela",
    "America", "América", "American", "Americain", "Americana",
    "Don't", "Can't", "Won't", "Didn't", "Couldn't", "Wouldn't", "Shouldn't",
    "Hasn't", "Haven't", "Isn't", "Aren't", "Wasn't", "Weren't", "Will",
    "Would", "Should", "Could", "Might", "Must", "Shall", "May", "Can",
    "Up", "Out", "Down", "Over", "Under", "Through", "Into", "Onto", "From",
    "Back", "Away", "Home", "Off", "Around", "Along", "Across", "Past",
    "Never", "Always", "Sometimes", "Often", "Usually", "Rarely", "Seldom",
    "Just", "Only", "Even", "Still", "Yet", "Already", "Soon", "Later",
    "Today", "Tomorrow", "Yesterday", "Tonight", "Morning", "Evening",
    "Way", "Time", "Day", "Night", "Year", "Life", "World", "People",
    "Place", "Thing", "Man", "Woman", "Girl", "Boy", "Child", "Mother",
    "Father", "Friend", "Heart", "Mind", "Soul", "Body", "Eyes", "Face",
    "Hands", "Voice", "Words", "Music", "Song", "Dance", "Party", "Fun",
    "Good", "Bad", "Right", "Wrong", "True", "False", "Real", "New", "Old",
    "Big", "Small", "Long", "Short", "Hot", "Cold", "Sweet", "Pretty",
    "Beautiful", "Wonderful", "Amazing", "Special", "Perfect", "Great",
    "Money", "Power", "Fame", "Success", "Failure", "Dreams", "Hope",
    "Pain", "Hate", "Peace", "War", "Freedom", "Truth", "Lies",
    "Uh", "Uhh", "Uhhh", "Mm", "Mmm", "Mmmm", "Hm", "Hmm", "Hmmm",
    "Aha", "Uh-huh", "Uh-oh", "Wow", "Yay", "Yep", "Nope",
    "I know", "I think", "I feel", "I want", "I need", "I love", "I hate",
    "She said", "He said", "They said", "We said", "You said",
    "She's got", "He's got", "I've got", "You've got", "We've got",
    "Don't know", "Don't care", "Don't want", "Don't need", "Don't stop",
    "Can't stop", "Won't stop", "Can't wait", "Won't wait", "Don't wait",
];
